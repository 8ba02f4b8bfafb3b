//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - validation failed",
    content_type = "application/json",
    example = json!({
        "errors": [
            {"field": "price", "message": "Price must be greater than zero"}
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid ID",
    content_type = "application/json",
    example = json!({
        "errors": [
            {"field": "id", "message": "ID 'abc' is not a valid integer"}
        ]
    })
)]
pub struct BadRequestIdResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({"error": "Product 42 not found"})
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({"error": "Internal server error"})
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
