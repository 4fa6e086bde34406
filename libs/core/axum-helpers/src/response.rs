//! JSON envelope helpers.
//!
//! Every body this service writes goes through [`respond_with_json`]: two-space
//! indented JSON with `Content-Type: application/json`. Failures use the
//! `{"error": "<message>"}` shape produced by [`respond_with_error`].

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::ErrorResponse;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize `payload` as indented JSON with the given status.
pub fn respond_with_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec_pretty(payload) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                format!("{{\n  \"error\": \"{}\"\n}}", SERIALIZATION_FAILED),
            )
                .into_response()
        }
    }
}

/// Respond with `{"error": message}`.
pub fn respond_with_error(status: StatusCode, message: impl Into<String>) -> Response {
    respond_with_json(
        status,
        &ErrorResponse {
            error: message.into(),
        },
    )
}

const SERIALIZATION_FAILED: &str = "Failed to serialize response";

/// `IntoResponse` wrapper that renders through [`respond_with_json`] with 200.
///
/// Pair it with a status for anything else: `(StatusCode::CREATED, PrettyJson(p))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        respond_with_json(StatusCode::OK, &self.0)
    }
}
