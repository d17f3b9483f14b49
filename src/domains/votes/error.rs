//! Vote-specific error types.

use thiserror::Error;

/// Errors that can occur during vote store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    /// The requested tool does not match any registered name.
    ///
    /// Carries the name exactly as the client sent it.
    #[error("Tool '{0}' not found")]
    NotFound(String),

    /// Two registered names differ only in case.
    #[error("Duplicate tool name: '{0}' collides with '{1}'")]
    DuplicateTool(String, String),

    /// A registered name is empty or only whitespace.
    #[error("Invalid tool name: '{0}'")]
    InvalidToolName(String),

    /// A thread panicked while holding the count lock.
    #[error("Vote store lock poisoned")]
    LockPoisoned,
}

impl VoteError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate(name: impl Into<String>, existing: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into(), existing.into())
    }

    /// Create a new "invalid tool name" error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidToolName(name.into())
    }

    /// Whether this error is the client's fault rather than ours.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
