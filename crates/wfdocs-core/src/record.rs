//! The workflow record stored in a [`Catalog`].
//!
//! [`Catalog`]: crate::Catalog

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::Locale;

/// A documented workflow definition.
///
/// Records are read-only once a catalog is built. Descriptions are stored in
/// English; other locales are derived with [`WorkflowRecord::localized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// Unique record identifier.
    pub id: i64,
    /// Source file name, also the lookup key for detail requests.
    pub filename: String,
    /// Human readable workflow name.
    pub name: String,
    /// Whether the workflow is enabled.
    pub active: bool,
    /// English description.
    pub description: String,
    /// How the workflow is started, e.g. `Webhook` or `Scheduled`.
    pub trigger_type: String,
    /// Complexity tag, e.g. `low`, `medium` or `high`.
    pub complexity: String,
    /// Number of nodes in the workflow graph.
    pub node_count: u32,
    /// Integrated services, in definition order.
    #[serde(default)]
    pub integrations: Vec<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "optional_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "optional_timestamp")]
    pub updated_at: Option<Timestamp>,
}

impl WorkflowRecord {
    /// Returns a copy with the description rewritten for `locale`.
    ///
    /// The name and every other field are left untouched.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> Self {
        let description = locale.translate_description(&self.description).into_owned();
        Self {
            description,
            ..self.clone()
        }
    }

    /// Returns whether `needle` occurs in the name or description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Unset timestamps travel as `""`, set ones as RFC 3339.
mod optional_timestamp {
    use jiff::Timestamp;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.collect_str(timestamp),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(text) if text.trim().is_empty() => Ok(None),
            Some(text) => text.parse::<Timestamp>().map(Some).map_err(D::Error::custom),
        }
    }
}
