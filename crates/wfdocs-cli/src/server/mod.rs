//! HTTP server startup and graceful shutdown.

mod error;
mod http_server;
mod lifecycle;
mod shutdown;

use axum::Router;

pub use self::error::{Result, ServerError};
use self::http_server::serve_http;
use self::lifecycle::log_failure;
use self::shutdown::shutdown_signal;
use crate::config::ServerConfig;

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "wfdocs_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "wfdocs_cli::server::shutdown";

/// Binds the configured address and serves `app` until a shutdown signal.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails while running.
pub async fn serve(app: Router, config: ServerConfig) -> Result<()> {
    serve_http(app, config).await.inspect_err(log_failure)
}
