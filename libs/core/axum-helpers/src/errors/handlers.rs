use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Handler for 404 Not Found. Used as the router fallback.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "The requested resource was not found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
