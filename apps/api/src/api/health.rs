//! Readiness endpoint

use axum::{routing::get, Json, Router};
use axum_helpers::AppError;
use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    service: String,
    version: String,
}

/// Ready only when the database answers a ping.
async fn ready(state: AppState) -> Result<Json<ReadyResponse>, AppError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| {
            tracing::warn!("Readiness ping failed: {}", e);
            AppError::ServiceUnavailable("Database unreachable".to_string())
        })?;

    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}
