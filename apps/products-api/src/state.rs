//! Application state management

use database::mongodb::{Client, Database};
use database::postgres::DatabaseConnection;
use tracing::info;

use crate::config::{Config, StoreConfig};

/// Handle to the store selected at startup
#[derive(Clone)]
pub enum Store {
    Postgres(DatabaseConnection),
    Mongo { client: Client, db: Database },
}

impl Store {
    /// Open the single connection (pool) for the configured backend.
    ///
    /// One attempt, no retry; the caller treats an error as fatal.
    pub async fn connect(config: &StoreConfig) -> eyre::Result<Self> {
        match config {
            StoreConfig::Postgres(postgres) => {
                let db = database::postgres::connect_from_config(postgres.clone()).await?;
                Ok(Store::Postgres(db))
            }
            StoreConfig::Mongo(mongo) => {
                info!("Connecting to MongoDB at {}", mongo.url());
                let client = database::mongodb::connect_from_config(mongo).await?;
                let db = client.database(mongo.database());
                info!(
                    "Successfully connected to MongoDB database: {}",
                    mongo.database()
                );
                Ok(Store::Mongo { client, db })
            }
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Store,
}
