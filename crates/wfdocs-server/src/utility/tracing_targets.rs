//! Centralized tracing target constants for structured logging.
//!
//! Every log line emitted outside a handler carries one of these targets, so
//! `RUST_LOG=wfdocs_server::metrics=trace` and similar filters work as
//! expected.

/// Request metrics and performance monitoring.
pub const TRACING_TARGET_METRICS: &str = "wfdocs_server::metrics";

/// Error recovery including middleware errors and request timeouts.
pub const TRACING_TARGET_RECOVERY_ERROR: &str = "wfdocs_server::recovery::error";

/// Panic recovery including handler panics.
pub const TRACING_TARGET_RECOVERY_PANIC: &str = "wfdocs_server::recovery::panic";

/// Per-address request budgets.
pub const TRACING_TARGET_RATE_LIMIT: &str = "wfdocs_server::rate_limit";

/// Error responses sent back to clients.
pub const TRACING_TARGET_HTTP_ERROR: &str = "wfdocs_server::http_error";

/// Query and path parameter extraction failures.
pub const TRACING_TARGET_EXTRACT: &str = "wfdocs_server::extract";

/// Service state assembly and static site lookups.
pub const TRACING_TARGET_SERVICE: &str = "wfdocs_server::service";
