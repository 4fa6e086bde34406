use core_config::{env_parse, ConfigError, FromEnv};

/// What update/delete report when no record matches the id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingWritePolicy {
    /// Succeed anyway: PUT echoes the input, DELETE reports success
    #[default]
    Ignore,
    /// Respond 404 `Product not found`, like GET does
    NotFound,
}

/// Products domain settings
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub missing_writes: MissingWritePolicy,
}

/// Load CatalogConfig from environment variables
///
/// - `PRODUCTS_STRICT_WRITES` (default: false) - when true, update/delete of
///   an unknown id respond 404
impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let strict: bool = env_parse("PRODUCTS_STRICT_WRITES", "false")?;

        Ok(Self {
            missing_writes: if strict {
                MissingWritePolicy::NotFound
            } else {
                MissingWritePolicy::Ignore
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_ignore() {
        temp_env::with_var_unset("PRODUCTS_STRICT_WRITES", || {
            let config = CatalogConfig::from_env().unwrap();
            assert_eq!(config.missing_writes, MissingWritePolicy::Ignore);
        });
    }

    #[test]
    fn test_strict_writes() {
        temp_env::with_var("PRODUCTS_STRICT_WRITES", Some("true"), || {
            let config = CatalogConfig::from_env().unwrap();
            assert_eq!(config.missing_writes, MissingWritePolicy::NotFound);
        });
    }

    #[test]
    fn test_strict_writes_invalid() {
        temp_env::with_var("PRODUCTS_STRICT_WRITES", Some("sometimes"), || {
            let err = CatalogConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_STRICT_WRITES"));
        });
    }
}
