use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};
use crate::utility::tracing_targets::TRACING_TARGET_EXTRACT;

/// Query string extractor that rejects with a JSON [`Error`].
///
/// Behaves like [`axum::extract::Query`], but a string that fails to
/// deserialize (for example `page=abc`) produces a `400 bad_request` body
/// naming the offending parameter where possible.
///
/// ```rust,no_run
/// use serde::Deserialize;
/// use wfdocs_server::extract::Query;
///
/// #[derive(Deserialize)]
/// struct Params {
///     page: Option<i64>,
/// }
///
/// async fn handler(Query(params): Query<Params>) {
///     let _page = params.page.unwrap_or(1);
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Creates a new [`Query`] wrapper around the provided query parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(enhance_query_error(rejection)),
        }
    }
}

impl<T> aide::OperationInput for Query<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumQuery::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumQuery::<T>::inferred_early_responses(ctx, operation)
    }
}

/// Maps an axum query rejection to a descriptive `400` error.
fn enhance_query_error(rejection: QueryRejection) -> Error {
    tracing::debug!(
        target: TRACING_TARGET_EXTRACT,
        error = %rejection,
        "Query parameter parsing failed"
    );

    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            let error_message = err.body_text();

            if error_message.contains("invalid digit")
                || error_message.contains("invalid type")
                || error_message.contains("provided string was not")
            {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameter type")
                    .with_context(format!(
                        "Failed to parse query parameter{}: {}",
                        describe_field(extract_field_name_from_error(&error_message)),
                        error_message
                    ))
            } else if error_message.contains("duplicate field") {
                let field_name = extract_field_name_from_error(&error_message);
                ErrorKind::BadRequest
                    .with_message("Duplicate query parameter")
                    .with_context(format!(
                        "The query parameter '{}' was provided multiple times",
                        field_name.unwrap_or("unknown")
                    ))
            } else {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameters")
                    .with_context(format!("Failed to parse query string: {}", error_message))
            }
        }
        _ => ErrorKind::BadRequest
            .with_message("Invalid query parameters")
            .with_context("The query string could not be parsed"),
    }
}

fn describe_field(field: Option<&str>) -> String {
    field.map(|name| format!(" '{name}'")).unwrap_or_default()
}

/// Best-effort extraction of a field name from a serde error message.
fn extract_field_name_from_error(error_message: &str) -> Option<&str> {
    if let Some(start) = error_message.find('`')
        && let Some(end) = error_message[start + 1..].find('`')
    {
        return Some(&error_message[start + 1..start + 1 + end]);
    }

    if let Some(start) = error_message.find("field ") {
        let field_part = &error_message[start + 6..];
        if let Some(end) = field_part.find(|c: char| c == ' ' || c == ':') {
            return Some(&field_part[..end]);
        }
    }

    None
}
