//! Panel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ORDERDESK_API_URL` - Order endpoint URL (default:
//!   `http://127.0.0.1:8400/orders`)
//! - `ORDERDESK_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDERDESK_PORT` - Listen port (default: 8300)
//! - `ORDERDESK_FETCH_TIMEOUT_SECS` - Outbound fetch timeout (default: 10)
//! - `ORDERDESK_FETCH_RETRIES` - Extra fetch attempts after a network failure
//!   (default: 0, i.e. a single attempt)
//! - `ORDERDESK_DISPLAY_LIMIT` - Maximum orders shown by the panel
//!   (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Order endpoint used when `ORDERDESK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8400/orders";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8300;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Panel application configuration.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Order endpoint URL; resolved per fetch, so a blank value surfaces as a
    /// configuration error inside the load cycle rather than at startup
    pub api_url: String,
    /// Timeout applied to the outbound order fetch
    pub fetch_timeout: Duration,
    /// Extra fetch attempts after a network failure (0 = single attempt)
    pub fetch_retries: u32,
    /// Maximum number of orders handed to the renderer
    pub display_limit: usize,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl PanelConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDERDESK_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERDESK_HOST".to_string(), e.to_string()))?;
        let port = parse_env("ORDERDESK_PORT", DEFAULT_PORT)?;
        let api_url = get_env_or_default("ORDERDESK_API_URL", DEFAULT_API_URL);
        let fetch_timeout = Duration::from_secs(parse_env(
            "ORDERDESK_FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?);
        let fetch_retries = parse_env("ORDERDESK_FETCH_RETRIES", 0)?;
        let display_limit = parse_env("ORDERDESK_DISPLAY_LIMIT", DEFAULT_DISPLAY_LIMIT)?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            api_url,
            fetch_timeout,
            fetch_retries,
            display_limit,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for PanelConfig {
    /// The documented defaults, without reading the environment.
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            fetch_retries: 0,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            sentry_dsn: None,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
