use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::create_cors_layer;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind or the server
/// encounters an error during operation.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - Swagger UI at `/docs`, backed by `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - Request tracing and CORS
/// - 404 fallback handler
///
/// `allowed_origin` is the single origin CORS will accept, taken from the
/// app's [`ServerConfig`]; requests from any other origin are rejected
/// before reaching the router. An unparsable origin is a startup error.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Arguments
/// * `apis` - Router with all routes (state already applied to individual routes)
/// * `allowed_origin` - Origin accepted by CORS, e.g. `http://localhost:5173`
pub async fn create_router<T>(apis: Router, allowed_origin: &str) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    let allowed_origin = allowed_origin
        .trim()
        .parse::<axum::http::HeaderValue>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS allowed origin '{}': {}", allowed_origin, e),
            )
        })?;

    info!("CORS configured with allowed origin: {:?}", allowed_origin);

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(create_cors_layer(allowed_origin));

    Ok(router)
}
