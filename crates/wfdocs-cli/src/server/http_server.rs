//! Plain HTTP listener.

use std::future::{IntoFuture, pending};
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::lifecycle::serve_with_shutdown;
use super::{
    Result, ServerError, TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP, shutdown_signal,
};
use crate::config::ServerConfig;

/// Validates the configuration, binds the listener and serves `app`.
///
/// Connection info is attached to every request so the metrics and rate
/// limiting middleware see the peer address. Connections still open
/// `shutdown_timeout` after the signal are dropped.
pub(crate) async fn serve_http(app: Router, server_config: ServerConfig) -> Result<()> {
    server_config
        .validate()
        .map_err(|err| ServerError::invalid_config(&err))?;

    let server_addr = server_config.server_addr();
    let listener = TcpListener::bind(server_addr)
        .await
        .map_err(|err| ServerError::bind_error(server_addr, err))?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %server_addr,
        "Successfully bound to address"
    );

    let drain_timeout = server_config.shutdown_timeout();
    let (signalled, on_signal) = oneshot::channel::<()>();
    let shutdown = async move {
        shutdown_signal(drain_timeout).await;
        let _ = signalled.send(());
    };

    serve_with_shutdown(&server_config, || async move {
        let server = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .into_future();

        let drain_deadline = async move {
            match on_signal.await {
                Ok(()) => tokio::time::sleep(drain_timeout).await,
                Err(_) => pending::<()>().await,
            }
        };

        tokio::select! {
            result = server => result,
            () = drain_deadline => {
                tracing::warn!(
                    target: TRACING_TARGET_SHUTDOWN,
                    timeout_secs = drain_timeout.as_secs(),
                    "drain timeout elapsed, dropping open connections"
                );
                Ok(())
            }
        }
    })
    .await
}
