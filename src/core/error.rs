//! Error types and handling for the vote server.
//!
//! This module defines a unified error type that can represent errors from
//! the votes domain and configuration, so startup code can propagate
//! them with `?`.

use thiserror::Error;

use crate::domains::votes::VoteError;

/// A specialized Result type for vote server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the vote server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the votes domain.
    #[error("Vote error: {0}")]
    Vote(#[from] VoteError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
