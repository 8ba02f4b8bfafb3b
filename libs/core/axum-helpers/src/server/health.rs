use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use core_config::AppInfo;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Liveness check handler. Always returns 200 while the process is up.
pub async fn health_handler(State(app): State<AppInfo>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response))
}

/// Creates a router with the `/health` endpoint.
///
/// The handler reports the app name and version from [`AppInfo`]. Readiness
/// checks (which ping real dependencies) belong to the app, which knows its
/// own connections.
pub fn health_router(app: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app)
}
