//! Votes domain module.
//!
//! This module holds the vote-able tool set and the counts clients cast
//! against it.
//!
//! ## Architecture
//!
//! - `store.rs` - `VoteStore`: canonical names, case-insensitive lookup, counters
//! - `registry.rs` - Default tool set and tool-list parsing
//! - `handlers.rs` - Response payloads sent by the HTTP layer
//! - `error.rs` - Vote-specific error types

mod error;
mod handlers;
pub mod registry;
mod store;

pub use error::VoteError;
pub use handlers::{ErrorBody, VoteReceipt};
pub use store::{ToolTally, VoteStore};
