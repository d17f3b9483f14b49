//! Transport configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Origins allowed to make cross-origin requests.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Seconds to wait for in-flight requests after a shutdown signal.
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://react-frontend-service:80".to_string()]
}

fn default_shutdown_grace_secs() -> u64 {
    5
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            cors_origins: default_cors_origins(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address, other fields defaulted.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load HTTP config from environment variables.
    ///
    /// Reads `HOST`, `PORT`, `CORS_ORIGINS` (comma-separated) and
    /// `SHUTDOWN_GRACE_SECS`. Values that fail to parse fall back to defaults.
    pub fn from_env() -> Self {
        let port = parse_env("PORT", default_port());
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
        let cors_origins = std::env::var("CORS_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_cors_origins);
        let shutdown_grace_secs = parse_env("SHUTDOWN_GRACE_SECS", default_shutdown_grace_secs());

        Self {
            port,
            host,
            cors_origins,
            shutdown_grace_secs,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Grace period as a `Duration`.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}

/// Split a comma-separated origin list, trimming blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
