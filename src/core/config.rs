//! Configuration management for the vote server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use crate::domains::votes::registry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the vote server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Votes domain configuration.
    pub votes: VotesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the votes domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotesConfig {
    /// Canonical names of the vote-able tools, fixed for the process lifetime.
    pub tools: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for VotesConfig {
    fn default() -> Self {
        Self {
            tools: registry::tool_names(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tool-vote-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            votes: VotesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Recognized variables: `SERVER_NAME`, `LOG_LEVEL`, `VOTE_TOOLS`, plus
    /// the transport variables read by [`HttpConfig::from_env`].
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            info!("No .env file found");
        }

        let mut config = Self::default();

        if let Ok(name) = std::env::var("SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(raw) = std::env::var("VOTE_TOOLS") {
            match registry::parse_tool_list(&raw) {
                Some(tools) => {
                    info!("Tool set loaded from environment: {}", tools.join(", "));
                    config.votes.tools = tools;
                }
                None => warn!("VOTE_TOOLS is set but empty, using default tool set"),
            }
        }

        config.transport = HttpConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "SERVER_NAME",
            "LOG_LEVEL",
            "VOTE_TOOLS",
            "HOST",
            "PORT",
            "CORS_ORIGINS",
            "SHUTDOWN_GRACE_SECS",
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_config_defaults_from_empty_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.server.name, "tool-vote-server");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.votes.tools, registry::tool_names());
        assert_eq!(config.transport.port, 8080);
        assert_eq!(config.transport.shutdown_grace_secs, 5);
    }

    #[test]
    fn test_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "9090");
            std::env::set_var("CORS_ORIGINS", "http://localhost:3000,http://example.com");
            std::env::set_var("VOTE_TOOLS", "Terraform,Helm");
            std::env::set_var("SHUTDOWN_GRACE_SECS", "10");
        }

        let config = Config::from_env();
        assert_eq!(config.transport.port, 9090);
        assert_eq!(
            config.transport.cors_origins,
            vec!["http://localhost:3000", "http://example.com"]
        );
        assert_eq!(config.votes.tools, vec!["Terraform", "Helm"]);
        assert_eq!(config.transport.shutdown_grace_secs, 10);

        clear_env();
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "not-a-port");
            std::env::set_var("VOTE_TOOLS", " , ");
            std::env::set_var("CORS_ORIGINS", "");
        }

        let config = Config::from_env();
        assert_eq!(config.transport.port, 8080);
        assert_eq!(config.votes.tools, registry::tool_names());
        assert_eq!(
            config.transport.cors_origins,
            vec!["http://react-frontend-service:80"]
        );

        clear_env();
    }
}
