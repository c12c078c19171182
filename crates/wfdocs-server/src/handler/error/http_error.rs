//! Handler error type rendered as a JSON [`ErrorResponse`].

use std::borrow::Cow;
use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use strum::IntoStaticStr;

use crate::handler::response::ErrorResponse;
use crate::utility::tracing_targets::TRACING_TARGET_HTTP_ERROR;

type Text = Cow<'static, str>;

/// Failure returned by handlers, extractors and middleware.
///
/// The [`ErrorKind`] fixes the status code and the default message; the
/// optional parts refine the body. `context` is only logged.
#[derive(Debug, Clone, Default)]
#[must_use = "errors do nothing unless turned into a response"]
pub struct Error {
    kind: ErrorKind,
    message: Option<Text>,
    resource: Option<Text>,
    suggestion: Option<Text>,
    context: Option<Text>,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Appends a detail sentence to the kind's default message.
    pub fn with_message(mut self, message: impl Into<Text>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<Text>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<Text>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Adds server-side context. Repeated calls are joined with `; `.
    pub fn with_context(mut self, context: impl Into<Text>) -> Self {
        let context = context.into();
        self.context = Some(match self.context.take() {
            Some(existing) => format!("{existing}; {context}").into(),
            None => context,
        });
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    #[inline]
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    #[inline]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.kind.status_code().as_u16())?;
        write!(f, ": {}", self.message().unwrap_or(self.kind.default_message()))?;

        if let Some(resource) = self.resource() {
            write!(f, " [{resource}]")?;
        }
        if let Some(context) = self.context() {
            write!(f, " - {context}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();

        tracing::warn!(
            target: TRACING_TARGET_HTTP_ERROR,
            status = status.as_u16(),
            name = self.kind.name(),
            resource = self.resource(),
            context = self.context(),
            "request failed"
        );

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl aide::OperationOutput for Error {
    type Inner = ErrorResponse;
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// [`Result`] alias for handlers.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kinds the server can emit, one per status code and body name.
#[must_use]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed query or path values.
    BadRequest,
    /// A matched route is missing one of its path parameters.
    MissingPathParam,
    /// Unknown workflow or route.
    NotFound,
    /// Request body above the security layer's limit.
    PayloadTooLarge,
    /// Per-address request budget exhausted.
    TooManyRequests,
    #[default]
    InternalServerError,
    /// Request deadline exceeded.
    GatewayTimeout,
}

impl ErrorKind {
    /// Returns the snake-case name sent as `name` in the body.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::MissingPathParam => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Invalid request data.",
            Self::MissingPathParam => "Missing path parameter.",
            Self::NotFound => "Resource not found.",
            Self::PayloadTooLarge => "Payload too large.",
            Self::TooManyRequests => {
                "Too many requests from this IP, please try again later."
            }
            Self::InternalServerError => "Internal server error.",
            Self::GatewayTimeout => "Request timed out.",
        }
    }

    #[inline]
    pub fn with_message(self, message: impl Into<Text>) -> Error {
        Error::new(self).with_message(message)
    }

    #[inline]
    pub fn with_resource(self, resource: impl Into<Text>) -> Error {
        Error::new(self).with_resource(resource)
    }

    #[inline]
    pub fn with_context(self, context: impl Into<Text>) -> Error {
        Error::new(self).with_context(context)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        Error::new(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [ErrorKind; 7] = [
        ErrorKind::BadRequest,
        ErrorKind::MissingPathParam,
        ErrorKind::NotFound,
        ErrorKind::PayloadTooLarge,
        ErrorKind::TooManyRequests,
        ErrorKind::InternalServerError,
        ErrorKind::GatewayTimeout,
    ];

    #[test]
    fn default_is_internal_server_error() {
        let error = Error::default();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn kinds_map_to_error_statuses() {
        for kind in KINDS {
            assert!(kind.status_code().is_client_error() || kind.status_code().is_server_error());
            assert_eq!(kind.into_response().status(), kind.status_code());
        }
        assert_eq!(ErrorKind::TooManyRequests.name(), "too_many_requests");
        assert_eq!(ErrorKind::MissingPathParam.to_string(), "missing_path_param");
    }

    #[test]
    fn context_accumulates() {
        let error = ErrorKind::InternalServerError
            .with_context("static directory missing")
            .with_context("index.html not found");

        assert_eq!(
            error.context(),
            Some("static directory missing; index.html not found")
        );
    }

    #[test]
    fn display_includes_every_part() {
        let display = ErrorKind::NotFound
            .with_message("Workflow not found")
            .with_resource("workflow")
            .with_context("filename: missing.json")
            .to_string();

        assert_eq!(
            display,
            "not_found (404): Workflow not found [workflow] - filename: missing.json"
        );
    }

    #[test]
    fn display_falls_back_to_default_message() {
        let display = Error::new(ErrorKind::BadRequest).to_string();
        assert_eq!(display, "bad_request (400): Invalid request data.");
    }

    #[tokio::test]
    async fn response_body_is_json() -> anyhow::Result<()> {
        let response = ErrorKind::TooManyRequests.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert_eq!(body["name"], "too_many_requests");
        assert!(body.get("resource").is_none());

        Ok(())
    }
}
