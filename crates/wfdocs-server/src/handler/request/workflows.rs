//! Workflow search request types.

use schemars::JsonSchema;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use wfdocs_core::{Locale, Pagination, WorkflowQuery};

use crate::handler::{ErrorKind, Result};

/// Query parameters of `GET /api/workflows`.
///
/// Every parameter is optional. `page` and `per_page` are clamped rather
/// than rejected: `page` to at least 1 and `per_page` to `1..=100`. A
/// `page` beyond `u32::MAX` cannot be echoed back and is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SearchWorkflows {
    /// Case-insensitive text matched against name and description.
    pub q: String,
    /// Trigger type filter. Echoed in the response only.
    pub trigger: String,
    /// Complexity filter. Echoed in the response only.
    pub complexity: String,
    /// Return only active workflows. Accepts `true`/`false`, `1`/`0`,
    /// `yes`/`no` and `on`/`off` in any case.
    #[serde(deserialize_with = "deserialize_flag")]
    pub active_only: bool,
    /// Page number, starting at 1.
    pub page: i64,
    /// Page size, at most 100.
    pub per_page: i64,
    /// Response language. `zh` selects Chinese; anything else English.
    pub lang: String,
}

impl Default for SearchWorkflows {
    fn default() -> Self {
        Self {
            q: String::new(),
            trigger: "all".to_owned(),
            complexity: "all".to_owned(),
            active_only: false,
            page: Pagination::DEFAULT_PAGE.into(),
            per_page: Pagination::DEFAULT_PER_PAGE.into(),
            lang: Locale::En.to_string(),
        }
    }
}

impl SearchWorkflows {
    /// Converts the request into a catalog query.
    pub fn into_query(self) -> Result<WorkflowQuery> {
        if self.page > i64::from(u32::MAX) {
            return Err(ErrorKind::BadRequest
                .with_message(format!("Page must be at most {}", u32::MAX))
                .with_context(format!("requested page {}", self.page)));
        }

        let locale = Locale::from_tag(&self.lang);

        Ok(WorkflowQuery::new()
            .with_text(self.q)
            .with_trigger(self.trigger)
            .with_complexity(self.complexity)
            .with_active_only(self.active_only)
            .with_pagination(Pagination::new(self.page, self.per_page))
            .with_locale(locale))
    }
}

/// Parses a query-string flag the way form frameworks commonly do.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        D::Error::invalid_value(Unexpected::Str(&raw), &"a boolean such as true, 1, yes or on")
    })
}
