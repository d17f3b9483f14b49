//! Tool Vote Server Library
//!
//! This crate provides a small HTTP service that exposes a fixed set of
//! named tools and lets clients vote for them. Counts live in memory and
//! reset on restart.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the `VoteServer` composition
//!   root, health reporting and the axum HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **votes**: the tool registry and the concurrent `VoteStore`
//!
//! # Example
//!
//! ```rust,no_run
//! use tool_vote_server::core::{Config, HttpTransport, VoteServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = VoteServer::new(config.clone())?;
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, VoteServer};
