//! Products API - REST server

use axum_helpers::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connect to PostgreSQL; startup aborts if the database stays unreachable
    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("Failed to connect to PostgreSQL: {}", e))?;

    run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state);
    let router =
        axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &config.server.cors_allowed_origin)
            .await?;
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!("Starting Products API on port {}", config.server.port);

    create_app(app, &config.server).await?;

    info!("Shutting down: closing PostgreSQL connection");
    state.db.close().await?;
    info!("Products API shutdown complete");

    Ok(())
}
