//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Default HTTP port for the store API.
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Store API configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// HTTP server port
    pub http_port: u16,

    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// Whether to start with the demo catalog and customers
    pub seed: bool,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = StoreConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),

            seed: env::var("SEED_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SEED_DATA".to_string()))?,
        };

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            http_port: DEFAULT_HTTP_PORT,
            bind_addr: "0.0.0.0".to_string(),
            seed: true,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
