//! Vote server composition root.
//!
//! `VoteServer` owns the configuration and the single `VoteStore` for the
//! process. It is cheap to clone and is handed to the HTTP router as shared
//! state, so handlers never reach for a global.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::{Error, Result};
use super::health::HealthReport;
use crate::domains::votes::VoteStore;

/// Shared handle to the server's configuration and vote store.
#[derive(Clone)]
pub struct VoteServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The vote counts for every configured tool.
    store: Arc<VoteStore>,
}

impl VoteServer {
    /// Create a new vote server with the given configuration.
    ///
    /// Fails if the configured tool set is empty or violates the store's
    /// naming rules.
    pub fn new(config: Config) -> Result<Self> {
        if config.votes.tools.is_empty() {
            return Err(Error::config("at least one tool must be configured"));
        }

        let store = VoteStore::new(config.votes.tools.iter().cloned())?;
        info!("Registered tools: {}", store.tool_names().join(", "));

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the vote store.
    pub fn store(&self) -> &VoteStore {
        &self.store
    }

    /// Run the health check against the current state.
    pub fn health(&self) -> HealthReport {
        HealthReport::check(&self.store)
    }
}
