//! HTTP transport implementation.
//!
//! Serves the vote API over HTTP with axum:
//! - `GET /tools` - every tool and its count
//! - `GET /tools/{name}` - one tool, case-insensitive
//! - `POST /vote/{tool}` - add one vote, case-insensitive
//! - `GET /health` - liveness/readiness probe
//!
//! Requests pass through CORS, request tracing and panic catching layers.
//! Shutdown is graceful: on signal the listener stops accepting and
//! in-flight requests get a bounded grace period to finish.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::{HeaderValue, Method, StatusCode, Uri, header};
use std::any::Any;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult, shutdown::shutdown_signal};
use crate::core::VoteServer;
use crate::domains::votes::{ErrorBody, ToolTally, VoteError, VoteReceipt};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Bind the configured address and serve until SIGINT/SIGTERM.
    pub async fn run(self, server: VoteServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        self.serve(listener, server, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `signal` resolves.
    ///
    /// After the signal, in-flight requests have `shutdown_grace_secs` to
    /// complete; past that the call returns `TransportError::ShutdownTimeout`.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        server: VoteServer,
        signal: F,
    ) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let grace = self.config.shutdown_grace();
        let app = build_router(server.clone(), &self.config);

        info!(
            "Ready - listening on {} (CORS origins: {})",
            addr,
            self.config.cors_origins.join(", ")
        );
        info!("  → List:   GET /tools");
        info!("  → Lookup: GET /tools/{{name}}");
        info!("  → Vote:   POST /vote/{{tool}}");
        info!("  → Health: GET /health");

        let draining = Arc::new(Notify::new());
        let trigger = Arc::clone(&draining);

        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                signal.await;
                trigger.notify_one();
            })
            .into_future();
        tokio::pin!(serve);

        tokio::select! {
            result = &mut serve => {
                result.map_err(|e| TransportError::http(e.to_string()))?;
            }
            _ = draining.notified() => {
                info!("Waiting up to {}s for in-flight requests", grace.as_secs());
                match tokio::time::timeout(grace, &mut serve).await {
                    Ok(result) => result.map_err(|e| TransportError::http(e.to_string()))?,
                    Err(_) => return Err(TransportError::ShutdownTimeout(grace.as_secs())),
                }
            }
        }

        match server.store().total_votes() {
            Ok(total) => info!("Server exited gracefully ({} votes discarded)", total),
            Err(e) => warn!("Server exited gracefully, vote total unavailable: {}", e),
        }

        Ok(())
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(server: VoteServer, config: &HttpConfig) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/{name}", get(get_tool))
        .route("/vote/{tool}", post(vote_for_tool))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(server)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

/// CORS policy: listed origins only, GET/POST/OPTIONS, credentials allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("Wildcard CORS origin cannot be combined with credentials, skipping");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Skipping invalid CORS origin {:?}: {}", origin, e);
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            debug!("{}", self);
            (StatusCode::NOT_FOUND, Json(ErrorBody::new(self.to_string()))).into_response()
        } else {
            error!("Request failed: {}", self);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
        }
    }
}

/// Convert a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Request handler panicked: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
}

/// List every tool and its current count.
async fn list_tools(
    State(server): State<VoteServer>,
) -> Result<Json<BTreeMap<String, u64>>, VoteError> {
    Ok(Json(server.store().list()?))
}

/// Look up a single tool by any casing of its name.
#[instrument(skip_all)]
async fn get_tool(
    State(server): State<VoteServer>,
    uri: Uri,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<ToolTally>, VoteError> {
    let name = tool_param(name, &uri);
    Ok(Json(server.store().lookup(&name)?))
}

/// Cast one vote for a tool.
#[instrument(skip_all)]
async fn vote_for_tool(
    State(server): State<VoteServer>,
    uri: Uri,
    tool: Result<Path<String>, PathRejection>,
) -> Result<Json<VoteReceipt>, VoteError> {
    let tool = tool_param(tool, &uri);
    let tally = server.store().vote(&tool)?;
    Ok(Json(VoteReceipt::from(tally)))
}

/// The tool name from the last path segment.
///
/// A segment that does not decode to UTF-8 cannot name any tool, so it is
/// decoded lossily and left for the store to reject as not found.
fn tool_param(param: Result<Path<String>, PathRejection>, uri: &Uri) -> String {
    match param {
        Ok(Path(name)) => name,
        Err(rejection) => {
            debug!("Undecodable tool name in {}: {}", uri.path(), rejection);
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            decode_lossy(raw)
        }
    }
}

/// Percent-decode a path segment, replacing invalid UTF-8.
fn decode_lossy(raw: &str) -> String {
    // Form decoding treats `+` and `&` specially; path segments do not.
    let escaped = raw.replace('+', "%2B").replace('&', "%26");
    serde_urlencoded::from_str::<Vec<(String, String)>>(&format!("v={escaped}"))
        .ok()
        .and_then(|pairs| pairs.into_iter().next())
        .map(|(_, value)| value)
        .unwrap_or_else(|| raw.to_string())
}

/// Health check endpoint.
async fn health_check(State(server): State<VoteServer>) -> impl IntoResponse {
    let report = server.health();
    let status = if report.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(report))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
