//! Signals that stop the server.

use std::future::{Future, pending};
use std::io;
use std::time::Duration;

use super::TRACING_TARGET_SHUTDOWN;

/// Process signal that ends the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Interrupt,
    Terminate,
}

impl Trigger {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }

    /// Resolves when this signal arrives. Never resolves if its handler
    /// cannot be installed.
    async fn wait(self, installed: impl Future<Output = io::Result<()>>) -> Self {
        if let Err(error) = installed.await {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                signal = self.as_str(),
                error = %error,
                "cannot listen for signal"
            );
            pending::<()>().await;
        }
        self
    }
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    signal(SignalKind::terminate())?.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    pending().await
}

/// Waits for Ctrl+C or, on Unix, SIGTERM.
///
/// `drain_timeout` is only reported here; the HTTP server enforces it.
pub async fn shutdown_signal(drain_timeout: Duration) {
    let trigger = tokio::select! {
        trigger = Trigger::Interrupt.wait(tokio::signal::ctrl_c()) => trigger,
        trigger = Trigger::Terminate.wait(terminate()) => trigger,
    };

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        signal = trigger.as_str(),
        drain_timeout_secs = drain_timeout.as_secs(),
        "shutdown requested, draining open connections"
    );
}
