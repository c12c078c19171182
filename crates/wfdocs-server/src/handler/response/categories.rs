//! Category response types.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The workflow category list.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Categories {
    /// Category names in display order, translated when requested.
    pub categories: Vec<String>,
}

/// Mapping from workflow file name to category.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CategoryMappings {
    /// Always empty: records carry no category assignment.
    pub mappings: BTreeMap<String, String>,
}
