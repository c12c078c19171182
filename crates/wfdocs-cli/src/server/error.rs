//! Server error types with recovery suggestions.

use std::io;

use thiserror::Error;

/// Result type for server operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Errors raised while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to bind to the specified address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Runtime server error.
    #[error("Runtime error: {0}")]
    Runtime(#[source] io::Error),
}

impl ServerError {
    /// Creates an invalid configuration error from an anyhow error.
    pub fn invalid_config(err: &anyhow::Error) -> Self {
        Self::InvalidConfig(format!("{err:#}"))
    }

    /// Creates a bind error with address context.
    pub fn bind_error(address: impl ToString, source: io::Error) -> Self {
        Self::BindError {
            address: address.to_string(),
            source,
        }
    }

    /// Returns a unique error code for this error type.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "E001",
            Self::BindError { .. } => "E002",
            Self::Runtime(_) => "E003",
        }
    }

    /// Whether retrying (or changing the environment) might succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig(_) => false,
            Self::BindError { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::PermissionDenied
                    | io::ErrorKind::AddrInUse
                    | io::ErrorKind::AddrNotAvailable
            ),
            Self::Runtime(err) => matches!(
                err.kind(),
                io::ErrorKind::PermissionDenied
                    | io::ErrorKind::Interrupted
                    | io::ErrorKind::TimedOut
                    | io::ErrorKind::ConnectionRefused
            ),
        }
    }

    /// Provides a human-readable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig(_) => {
                Some("Check the command-line arguments and environment variables")
            }
            Self::BindError { source, .. } => match source.kind() {
                io::ErrorKind::PermissionDenied => {
                    Some("Try using a port above 1024 or run with appropriate privileges")
                }
                io::ErrorKind::AddrInUse => Some(
                    "The port is already in use. Try a different port or stop the conflicting service",
                ),
                io::ErrorKind::AddrNotAvailable => {
                    Some("The address is not available. Check network interface configuration")
                }
                _ => Some("Check network configuration and firewall settings"),
            },
            Self::Runtime(err) => match err.kind() {
                io::ErrorKind::PermissionDenied => Some("Check file and network permissions"),
                io::ErrorKind::Interrupted => Some("The operation was interrupted, you may retry"),
                io::ErrorKind::TimedOut => {
                    Some("The operation timed out, consider increasing timeout values")
                }
                _ => None,
            },
        }
    }

    /// Determines if this is a network-related error.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::BindError { .. })
            || matches!(self, Self::Runtime(err) if matches!(err.kind(),
                io::ErrorKind::ConnectionRefused |
                io::ErrorKind::ConnectionAborted |
                io::ErrorKind::ConnectionReset |
                io::ErrorKind::AddrInUse |
                io::ErrorKind::AddrNotAvailable
            ))
    }

    /// Returns key-value pairs describing this error for structured logs.
    pub fn context(&self) -> Vec<(&'static str, String)> {
        let mut context = vec![("error_code", self.error_code().to_string())];

        if let Some(suggestion) = self.suggestion() {
            context.push(("suggestion", suggestion.to_string()));
        }

        context.push(("recoverable", self.is_recoverable().to_string()));
        context.push(("network_error", self.is_network_error().to_string()));

        match self {
            Self::BindError { address, source } => {
                context.push(("address", address.clone()));
                context.push(("io_error_kind", format!("{:?}", source.kind())));
            }
            Self::Runtime(err) => {
                context.push(("io_error_kind", format!("{:?}", err.kind())));
            }
            Self::InvalidConfig(msg) => {
                context.push(("config_error", msg.clone()));
            }
        }

        context
    }
}
