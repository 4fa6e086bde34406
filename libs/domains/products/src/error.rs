use axum::response::{IntoResponse, Response};
use axum_helpers::errors::messages;
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid product ID")]
    InvalidId,

    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Product not found")]
    NotFound,

    /// Raw message from the storage driver
    #[error("{0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId => AppError::BadRequest("Invalid product ID".to_string()),
            ProductError::InvalidPayload => {
                AppError::BadRequest(messages::INVALID_PAYLOAD.to_string())
            }
            ProductError::NotFound => AppError::NotFound("Product not found".to_string()),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
