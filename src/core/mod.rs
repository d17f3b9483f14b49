//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the vote
//! server, including error handling, configuration, the composition root,
//! health reporting and the HTTP transport.

pub mod config;
pub mod error;
pub mod health;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use health::{HealthReport, HealthStatus};
pub use server::VoteServer;
pub use transport::{HttpConfig, HttpTransport, TransportError};
