//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Security (CORS, headers, compression, body limits)
//! - Observability (request ids, tracing spans, metrics)
//! - Rate limiting (per-address budget on `/api/` routes)
//! - Recovery (panics, timeouts, middleware errors)
//! - OpenAPI documentation
//!
//! ```rust,no_run
//! use axum::Router;
//! use wfdocs_server::middleware::{
//!     RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
//! };
//!
//! let app: Router = Router::new()
//!     .with_default_security()
//!     .with_metrics()
//!     .with_observability()
//!     .with_default_recovery();
//! ```

mod observability;
mod rate_limiting;
mod recovery;
mod security;
mod openapi;

pub use observability::{REQUEST_ID_HEADER, RouterObservabilityExt};
pub use rate_limiting::RouterRateLimitExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{
    CorsConfig, DEFAULT_MAX_BODY_SIZE, FrameOptions, ReferrerPolicy, RouterSecurityExt,
    SecurityHeadersConfig,
};
pub use openapi::{OpenApiConfig, RouterOpenApiExt};
