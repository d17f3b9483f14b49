//! Response payloads for the vote endpoints.
//!
//! These types are transport-agnostic: they only describe the JSON shape
//! the HTTP layer sends back.

use serde::{Deserialize, Serialize};

use super::store::ToolTally;

/// Body returned after a successful vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    /// Human-readable confirmation naming the canonical tool.
    pub message: String,

    /// Count after this vote was applied.
    pub votes: u64,
}

impl From<ToolTally> for VoteReceipt {
    fn from(tally: ToolTally) -> Self {
        Self {
            message: format!("{} vote count updated", tally.tool),
            votes: tally.votes,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    /// Create an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Generic body for failures whose cause stays server-side.
    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}
