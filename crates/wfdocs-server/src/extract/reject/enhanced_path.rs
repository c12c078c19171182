use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};
use crate::utility::tracing_targets::TRACING_TARGET_EXTRACT;

/// Path parameter extractor that rejects with a JSON [`Error`].
///
/// Wraps the axum [`Path`] extractor and converts its rejections into
/// `bad_request` or `missing_path_param` bodies.
///
/// [`Path`]: AxumPath
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new instance of [`Path`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner path parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(
            target: TRACING_TARGET_EXTRACT,
            error = %rejection,
            "Path parameter extraction failed"
        );

        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let error_message = err.to_string();

                ErrorKind::BadRequest
                    .with_message("Invalid path parameter format")
                    .with_context(format!(
                        "Path parameter deserialization failed: {}. {}",
                        sanitize_error_message(&error_message),
                        enhance_deserialization_error(&error_message)
                    ))
            }
            PathRejection::MissingPathParams(err) => ErrorKind::MissingPathParam
                .with_message("Required path parameter missing")
                .with_context(format!(
                    "Path parameter extraction failed: {}",
                    sanitize_error_message(&err.to_string())
                )),
            _ => ErrorKind::InternalServerError
                .with_message("Path processing failed")
                .with_context("Unexpected error during path parameter processing"),
        }
    }
}

/// Returns type-specific guidance for a deserialization failure.
fn enhance_deserialization_error(error_message: &str) -> &'static str {
    let error_lower = error_message.to_lowercase();

    if error_lower.contains("invalid digit") || error_lower.contains("cannot parse") {
        "Numeric parameters must contain only digits and be within the valid range"
    } else if error_lower.contains("utf-8") || error_lower.contains("utf8") {
        "Path parameters must be valid percent-encoded UTF-8"
    } else {
        "Check that the parameter format matches the expected type"
    }
}

/// Keeps the first two lines of an error, capped at 150 characters.
fn sanitize_error_message(message: &str) -> String {
    message
        .lines()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(150)
        .collect()
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_truncates_long_messages() {
        let long = "x".repeat(400);
        assert_eq!(sanitize_error_message(&long).len(), 150);

        let multi = "first\nsecond\nthird";
        assert_eq!(sanitize_error_message(multi), "first second");
    }

    #[test]
    fn deserialization_hints() {
        assert!(enhance_deserialization_error("invalid digit found in string").contains("Numeric"));
        assert!(enhance_deserialization_error("invalid utf-8 sequence").contains("UTF-8"));
        assert!(enhance_deserialization_error("something else").contains("expected type"));
    }
}
