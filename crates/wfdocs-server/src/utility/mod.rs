//! Utility modules for common functionality across the crate.

pub mod route_category;
pub mod tracing_targets;

pub use route_category::RouteCategory;
