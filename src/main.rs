//! Tool Vote Server Entry Point
//!
//! Initializes logging, loads configuration, builds the vote store and
//! serves the HTTP API until a shutdown signal arrives.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use tool_vote_server::core::{Config, HttpTransport, TransportError, VoteServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = VoteServer::new(config.clone())?;

    info!("Starting transport: {}", config.transport.description());

    match HttpTransport::new(config.transport).run(server).await {
        Err(TransportError::ShutdownTimeout(secs)) => {
            warn!("In-flight requests still running after {}s, forcing exit", secs);
        }
        result => result?,
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives still apply; `level` sets the baseline.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
