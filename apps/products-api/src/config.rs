//! Configuration for Products API

use axum_helpers::RouterOptions;
use core_config::{app_info, env_parse, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use database::postgres::PostgresConfig;
use domain_products::CatalogConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Which store backs the product endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Backend {
    #[default]
    Postgres,
    Mongodb,
}

/// Connection settings for the selected backend
#[derive(Clone, Debug)]
pub enum StoreConfig {
    Postgres(PostgresConfig),
    Mongo(MongoConfig),
}

impl StoreConfig {
    pub fn backend(&self) -> Backend {
        match self {
            StoreConfig::Postgres(_) => Backend::Postgres,
            StoreConfig::Mongo(_) => Backend::Mongodb,
        }
    }
}

/// Only the selected backend's variables are read, so a MongoDB deployment
/// does not need `DB_*` credentials.
impl FromEnv for StoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        match env_parse::<Backend>("PRODUCTS_BACKEND", "postgres")? {
            Backend::Postgres => Ok(StoreConfig::Postgres(PostgresConfig::from_env()?)),
            Backend::Mongodb => Ok(StoreConfig::Mongo(MongoConfig::from_env()?)),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub router: RouterOptions,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            store: StoreConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            router: RouterOptions::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_products::MissingWritePolicy;

    #[test]
    fn test_backend_defaults_to_postgres() {
        temp_env::with_vars(
            [
                ("PRODUCTS_BACKEND", None::<&str>),
                ("DATABASE_URL", Some("postgres://u:p@localhost/products")),
            ],
            || {
                let store = StoreConfig::from_env().unwrap();
                assert_eq!(store.backend(), Backend::Postgres);
            },
        );
    }

    #[test]
    fn test_mongodb_backend_ignores_postgres_credentials() {
        temp_env::with_vars(
            [
                ("PRODUCTS_BACKEND", Some("MongoDB")),
                ("DATABASE_URL", None::<&str>),
                ("DB_USERNAME", None::<&str>),
                ("MONGO_URI", Some("mongodb://mongo:27017")),
                ("MONGO_DATABASE", None::<&str>),
            ],
            || match StoreConfig::from_env().unwrap() {
                StoreConfig::Mongo(mongo) => {
                    assert_eq!(mongo.url(), "mongodb://mongo:27017");
                    assert_eq!(mongo.database(), "example-database");
                }
                other => panic!("expected MongoDB config, got {:?}", other),
            },
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        temp_env::with_var("PRODUCTS_BACKEND", Some("sqlite"), || {
            let err = StoreConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_BACKEND"));
        });
    }

    #[test]
    fn test_postgres_backend_requires_credentials() {
        temp_env::with_vars(
            [
                ("PRODUCTS_BACKEND", Some("postgres")),
                ("DATABASE_URL", None::<&str>),
                ("DB_USERNAME", None::<&str>),
            ],
            || {
                let err = StoreConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingEnvVar(_)));
            },
        );
    }

    #[test]
    fn test_config_from_env_composes_sections() {
        temp_env::with_vars(
            [
                ("PRODUCTS_BACKEND", Some("postgres")),
                ("DATABASE_URL", Some("postgres://u:p@localhost/products")),
                ("PORT", Some("9090")),
                ("PRODUCTS_STRICT_WRITES", Some("true")),
                ("DOCS_DIR", None::<&str>),
                ("CORS_ALLOWED_ORIGIN", None::<&str>),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "products_api");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.catalog.missing_writes, MissingWritePolicy::NotFound);
                assert_eq!(
                    config.router.docs_dir.as_deref(),
                    Some(std::path::Path::new("./api"))
                );
                assert!(config.router.cors_origins.is_empty());
            },
        );
    }
}
