//! Path parameter extractor for product identifiers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ProductError;
use crate::models::ProductId;

/// Extracts `{id}` and parses it into the store's identifier type.
///
/// Rejects with 400 `{"error": "Invalid product ID"}` before any store access.
///
/// ```ignore
/// async fn get_product(ProductIdPath(id): ProductIdPath<i32>) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct ProductIdPath<Id>(pub Id);

impl<Id, S> FromRequestParts<S> for ProductIdPath<Id>
where
    Id: ProductId,
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ProductError::InvalidId)?;

        raw.parse::<Id>()
            .map(ProductIdPath)
            .map_err(|_| {
                tracing::debug!(id = %raw, "Rejected product id");
                ProductError::InvalidId
            })
    }
}
