//! Service layer error types.
//!
//! These errors surface while the [`ServiceState`] is being assembled at
//! startup. Request handling has its own HTTP error type in
//! [`handler::Error`].
//!
//! [`ServiceState`]: crate::service::ServiceState
//! [`handler::Error`]: crate::handler::Error

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Type alias for boxed errors that are Send + Sync.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result type alias for service layer operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kind enumeration for categorizing service layer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration-related errors.
    Config,
    /// File system operation errors.
    FileSystem,
    /// The workflow catalog could not be built.
    Catalog,
}

impl ErrorKind {
    /// Returns the error kind as a string for categorization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::FileSystem => "file_system",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service layer error with structured information.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches a source error to this error, enabling error chain tracking.
    #[inline]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creates a new configuration error.
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Creates a new file system error.
    #[inline]
    pub fn file_system(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::FileSystem, message)
    }
}

impl From<wfdocs_core::Error> for Error {
    fn from(err: wfdocs_core::Error) -> Self {
        Error::new(ErrorKind::Catalog, err.message().to_owned()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("static directory is not a directory");
        assert_eq!(error.kind(), ErrorKind::Config);
        assert_eq!(error.message(), "static directory is not a directory");
    }

    #[test]
    fn test_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::file_system("cannot read static directory").with_source(source);

        assert!(StdError::source(&error).is_some());
        assert_eq!(error.kind(), ErrorKind::FileSystem);
    }

    #[test]
    fn test_catalog_error_conversion() {
        let error = Error::from(wfdocs_core::Error::invalid_data("duplicate workflow id 1"));

        assert_eq!(error.kind(), ErrorKind::Catalog);
        assert!(error.to_string().contains("duplicate workflow id 1"));
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::Config.as_str(), "config");
        assert_eq!(ErrorKind::FileSystem.as_str(), "file_system");
        assert_eq!(ErrorKind::Catalog.as_str(), "catalog");
    }
}
