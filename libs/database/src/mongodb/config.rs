#[cfg(feature = "config")]
use core_config::{env_optional, env_or_default, env_parse, ConfigError, FromEnv};

/// Default connection string for a local server
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Default database holding the `products` collection
pub const DEFAULT_MONGO_DATABASE: &str = "example-database";

/// MongoDB connection configuration
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MONGO_URI.to_string(),
            database: DEFAULT_MONGO_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 0,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 10,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGO_URI` (fallback `MONGODB_URL`, default: mongodb://localhost:27017)
/// - `MONGO_DATABASE` (default: example-database)
/// - `MONGO_APP_NAME` (optional)
/// - `MONGO_MAX_POOL_SIZE` (default: 100)
/// - `MONGO_MIN_POOL_SIZE` (default: 0)
/// - `MONGO_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGO_SERVER_SELECTION_TIMEOUT_SECS` (default: 10)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_optional("MONGO_URI")
            .or_else(|| env_optional("MONGODB_URL"))
            .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());

        Ok(Self {
            url,
            database: env_or_default("MONGO_DATABASE", DEFAULT_MONGO_DATABASE),
            app_name: env_optional("MONGO_APP_NAME"),
            max_pool_size: env_parse("MONGO_MAX_POOL_SIZE", "100")?,
            min_pool_size: env_parse("MONGO_MIN_POOL_SIZE", "0")?,
            connect_timeout_secs: env_parse("MONGO_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: env_parse("MONGO_SERVER_SELECTION_TIMEOUT_SECS", "10")?,
        })
    }
}
