use axum::{http::StatusCode, response::Response};

use super::messages;
use crate::response::respond_with_error;

/// Fallback handler for unmatched routes: 404 `{"error": "Not found"}`.
pub async fn not_found() -> Response {
    respond_with_error(StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND)
}

/// Fallback for a known path hit with an unsupported method: 405 `{"error": "Method not allowed"}`.
pub async fn method_not_allowed() -> Response {
    respond_with_error(StatusCode::METHOD_NOT_ALLOWED, messages::METHOD_NOT_ALLOWED)
}
