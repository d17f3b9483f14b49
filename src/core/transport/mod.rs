//! Transport layer for the vote server.
//!
//! The service speaks plain HTTP/JSON through axum. This module owns the
//! listener, the router and its middleware, and the shutdown sequence;
//! request handling itself delegates to the votes domain.

mod config;
mod error;
pub mod http;
pub mod shutdown;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use self::http::{HttpTransport, build_router};
