//! Domains module containing business logic organized by bounded contexts.
//!
//! The service currently has a single domain, `votes`, which owns the
//! tool registry and the in-memory vote counts.

pub mod votes;
