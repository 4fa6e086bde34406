//! Products API routes

use axum::Router;
use domain_products::{handlers, MongoProductRepository, PgProductRepository, ProductService};

use crate::state::{AppState, Store};

/// Create the products router for whichever store is configured
pub fn router(state: &AppState) -> Router {
    let catalog = state.config.catalog.clone();

    match &state.store {
        Store::Postgres(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::with_config(repository, catalog))
        }
        Store::Mongo { db, .. } => {
            let repository = MongoProductRepository::new(db);
            handlers::router(ProductService::with_config(repository, catalog))
        }
    }
}

/// Create the products table when running against PostgreSQL
pub async fn init_schema(state: &AppState) -> eyre::Result<()> {
    if let Store::Postgres(db) = &state.store {
        PgProductRepository::new(db.clone()).init_schema().await?;
    }
    Ok(())
}
