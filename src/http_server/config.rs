//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "OOLAHOP_HOST";

/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "OOLAHOP_PORT";

/// The port environment variable held a value that is not a port number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{PORT_VAR} value '{0}' is not a valid port")]
pub struct InvalidPort(pub String);

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Reads host and port overrides from the environment.
    pub fn from_env() -> Result<Self, InvalidPort> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var(HOST_VAR) {
            config.host = host;
        }
        if let Ok(port) = std::env::var(PORT_VAR) {
            config.port = port.parse().map_err(|_| InvalidPort(port))?;
        }
        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(3000);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_port_message_names_the_variable() {
        let err = InvalidPort("eighty".to_string());
        assert!(err.to_string().contains("OOLAHOP_PORT"));
        assert!(err.to_string().contains("eighty"));
    }
}
