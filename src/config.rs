//! Configuration loaded from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default listen address of the product service.
pub const PRODUCT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Default listen address of the stock service.
pub const STOCK_BIND_ADDR: &str = "0.0.0.0:8081";
/// Default listen address of the order service.
pub const ORDER_BIND_ADDR: &str = "0.0.0.0:8082";

pub const DEFAULT_STOCK_SERVICE_URL: &str = "http://localhost:8081";
pub const DEFAULT_STOCK_CLIENT_TIMEOUT_SECS: u64 = 30;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the service listens on (`BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// Base URL of the stock service, used by the order service (`STOCK_SERVICE_URL`).
    pub stock_service_url: String,
    /// Upper bound on one stock check (`STOCK_CLIENT_TIMEOUT_SECS`).
    pub stock_client_timeout: Duration,
    /// JSON file seeded into the stock store at startup (`STOCK_SEED_FILE`).
    pub stock_seed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables. `default_bind` is used
    /// when `BIND_ADDR` is unset.
    pub fn from_env(default_bind: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(default_bind, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(default_bind: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| default_bind.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;

        let stock_service_url = lookup("STOCK_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_STOCK_SERVICE_URL.to_string());
        if !stock_service_url.starts_with("http://") && !stock_service_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidStockServiceUrl(stock_service_url));
        }

        let timeout_secs = match lookup("STOCK_CLIENT_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_STOCK_CLIENT_TIMEOUT_SECS,
        };

        let stock_seed_file = lookup("STOCK_SEED_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            stock_service_url,
            stock_client_timeout: Duration::from_secs(timeout_secs),
            stock_seed_file,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
    #[error("invalid STOCK_SERVICE_URL (expected http:// or https://): {0}")]
    InvalidStockServiceUrl(String),
    #[error("invalid STOCK_CLIENT_TIMEOUT_SECS (expected a positive integer): {0}")]
    InvalidTimeout(String),
}
