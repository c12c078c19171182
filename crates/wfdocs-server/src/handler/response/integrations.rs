//! Integration response types.

/// Sorted, de-duplicated integration names.
pub type Integrations = Vec<String>;
