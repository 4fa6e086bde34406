//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

/// Fixed client-facing error messages
pub mod messages {
    pub const INVALID_PAYLOAD: &str = "Invalid request payload";
    pub const ROUTE_NOT_FOUND: &str = "Not found";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed identifier or payload",
    content_type = "application/json",
    example = json!({
        "error": "Invalid request payload"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - raw storage error message",
    content_type = "application/json",
    example = json!({
        "error": "connection refused"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
