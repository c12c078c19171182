//! Statistics response types.

/// Headline statistics for the workflow collection.
pub use wfdocs_core::CatalogStats as Stats;
