//! Store configuration.
//!
//! The store location comes from a single connection-string environment
//! variable; the database name has a default and is rarely overridden.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the connection string.
pub const MONGODB_URL_VAR: &str = "MONGODB_URL";

/// Environment variable overriding the database name.
pub const DATABASE_VAR: &str = "OOLAHOP_DATABASE";

/// A required environment variable was not set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("environment variable {0} is not set")]
pub struct ConfigError(pub &'static str);

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Connection string for the document store
    pub url: String,

    /// Database name (default: "oolahop")
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "oolahop".to_string()
}

impl StoreConfig {
    /// Reads the configuration from the environment.
    ///
    /// Fails when the connection-string variable is unset; the database
    /// name falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(MONGODB_URL_VAR).map_err(|_| ConfigError(MONGODB_URL_VAR))?;
        let database = std::env::var(DATABASE_VAR).unwrap_or_else(|_| default_database());
        Ok(Self { url, database })
    }

    /// Create a config pointing at the given connection string.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: default_database(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database() {
        let config = StoreConfig::with_url("mongodb://localhost:27017");
        assert_eq!(config.database, "oolahop");
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let err = ConfigError(MONGODB_URL_VAR);
        assert!(err.to_string().contains("MONGODB_URL"));
    }
}
