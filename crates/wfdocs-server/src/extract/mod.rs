//! Request extractors with JSON error responses.
//!
//! Drop-in replacements for the axum extractors of the same name. Rejections
//! become [`handler::Error`]s, so a malformed query string or path produces
//! the same JSON error body as any other failure.
//!
//! - [`Query`] - query string deserialization
//! - [`Path`] - path parameter deserialization
//! - [`Json`] - JSON response body with OpenAPI output metadata
//!
//! [`handler::Error`]: crate::handler::Error

pub mod reject;

pub use crate::extract::reject::{Json, Path, Query};
