//! Catalog-wide statistics.

use serde::{Deserialize, Serialize};

/// Headline numbers for the full workflow collection.
///
/// These describe the published collection rather than the records loaded
/// into this process, so they are constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CatalogStats {
    /// Number of workflows.
    pub total: u32,
    /// Number of active workflows.
    pub active: u32,
    /// Sum of node counts across all workflows.
    pub total_nodes: u32,
    /// Number of distinct integrations.
    pub unique_integrations: u32,
}

impl CatalogStats {
    /// The published collection statistics.
    pub const PUBLISHED: Self = Self {
        total: 2055,
        active: 1847,
        total_nodes: 29445,
        unique_integrations: 365,
    };
}

impl Default for CatalogStats {
    fn default() -> Self {
        Self::PUBLISHED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_stats_wire_format() {
        let value = serde_json::to_value(CatalogStats::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "total": 2055,
                "active": 1847,
                "total_nodes": 29445,
                "unique_integrations": 365,
            })
        );
    }
}
