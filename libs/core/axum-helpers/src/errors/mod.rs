pub mod handlers;
pub mod responses;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field ("id" for path parameters, "body" for
    /// malformed request bodies)
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 400 response body: a structured list of field errors.
///
/// # JSON Example
///
/// ```json
/// {"errors": [{"field": "price", "message": "Price must be greater than zero"}]}
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Error body for non-validation failures (404, 500, 503).
///
/// # JSON Example
///
/// ```json
/// {"error": "Product 42 not found"}
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type that converts to HTTP responses.
///
/// Validation problems render as a 400 with a field-error list; everything
/// else renders as `{"error": ...}` with the appropriate status. Internal
/// details are logged, never leaked to clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Request validation failed")]
    Validation(Vec<FieldError>),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Flatten `validator` output into the wire-format field-error list.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, violations) in errors.field_errors() {
        for violation in violations {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            out.push(FieldError::new(field.to_string(), message));
        }
    }
    out
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::info!(count = errors.len(), "Request validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
            AppError::JsonExtractorRejection(rejection) => {
                tracing::info!("JSON extraction failed: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse {
                        errors: vec![FieldError::new("body", rejection.body_text())],
                    }),
                )
                    .into_response()
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::ServiceUnavailable(message) => {
                tracing::warn!("Service unavailable: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response()
            }
        }
    }
}
