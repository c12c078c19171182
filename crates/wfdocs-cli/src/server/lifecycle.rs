//! Server lifecycle: readiness logging, uptime and failure reports.

use std::future::Future;
use std::io;
use std::time::Instant;

use super::{Result, ServerError, TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};
use crate::config::ServerConfig;

/// Runs the server future, logging readiness, shutdown and uptime.
pub(crate) async fn serve_with_shutdown<F>(
    server_config: &ServerConfig,
    serve_fn: impl FnOnce() -> F,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    let start_time = Instant::now();

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %server_config.server_addr(),
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    serve_fn().await.map_err(ServerError::Runtime)?;

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        uptime_secs = start_time.elapsed().as_secs(),
        "Server shut down gracefully"
    );

    Ok(())
}

/// Logs a fatal server error with its code and recovery suggestion.
pub(crate) fn log_failure(error: &ServerError) {
    let context = error
        .context()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::error!(
        target: TRACING_TARGET_SHUTDOWN,
        error = %error,
        error_code = error.error_code(),
        context = %context,
        "Fatal server error"
    );

    if let Some(suggestion) = error.suggestion() {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            suggestion = suggestion,
            "Recovery suggestion"
        );
    }
}
