//! Products API - REST server over PostgreSQL or MongoDB

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Store};

/// Assemble the full HTTP surface for an already-connected store
fn build_app(state: &AppState) -> Router {
    create_router::<openapi::ApiDoc>(api::routes(state), state.config.router.clone())
        .merge(health_router(state.config.app))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(backend = %config.store.backend(), "Connecting to product store");
    let store = Store::connect(&config.store).await?;

    let state = AppState { config, store };
    api::init_schema(&state).await?;

    let app = build_app(&state);

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
