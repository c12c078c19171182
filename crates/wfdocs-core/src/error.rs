//! Catalog loading errors.

use std::borrow::Cow;
use std::error::Error as StdError;

use strum::{AsRefStr, IntoStaticStr};

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Type alias for Results with the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur while building a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The catalog source could not be read.
    Io,
    /// The catalog source is not valid JSON for a list of records.
    Serialization,
    /// The records decoded but violate a catalog invariant.
    InvalidData,
}

/// Error raised while loading or assembling a [`Catalog`].
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, thiserror::Error)]
#[error("{} error: {message}", kind.as_ref())]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    /// Creates a new [`Error`].
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches a source error.
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

    /// Creates a new I/O error.
    #[inline]
    pub fn io(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    /// Creates a new serialization error.
    #[inline]
    pub fn serialization(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Creates a new invalid data error.
    #[inline]
    pub fn invalid_data(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidData, message)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("invalid catalog json: {err}")).with_source(err)
    }
}
