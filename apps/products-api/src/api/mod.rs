//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    products::router(state).merge(health::router(state.clone()))
}

/// Prepare the store before serving
pub async fn init_schema(state: &AppState) -> eyre::Result<()> {
    products::init_schema(state).await
}
