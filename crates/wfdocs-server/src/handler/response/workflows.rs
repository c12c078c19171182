//! Workflow response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wfdocs_core::{AppliedFilters, SearchPage, WorkflowRecord};

/// A documented workflow.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Workflow {
    /// Unique workflow identifier.
    pub id: i64,
    /// Workflow file name, usable with the detail endpoint.
    pub filename: String,
    /// Workflow name.
    pub name: String,
    /// Whether the workflow is enabled.
    pub active: bool,
    /// Description in the requested language.
    pub description: String,
    /// How the workflow is started.
    pub trigger_type: String,
    /// Complexity tag.
    pub complexity: String,
    /// Number of nodes in the workflow.
    pub node_count: u32,
    /// Integrated services, in definition order.
    pub integrations: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Creation time (RFC 3339), empty when unknown.
    pub created_at: String,
    /// Last update time (RFC 3339), empty when unknown.
    pub updated_at: String,
}

impl Workflow {
    /// Builds the response shape from a catalog record.
    pub fn from_record(record: WorkflowRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename,
            name: record.name,
            active: record.active,
            description: record.description,
            trigger_type: record.trigger_type,
            complexity: record.complexity,
            node_count: record.node_count,
            integrations: record.integrations,
            tags: record.tags,
            created_at: record
                .created_at
                .map(|timestamp| timestamp.to_string())
                .unwrap_or_default(),
            updated_at: record
                .updated_at
                .map(|timestamp| timestamp.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Filters as received in the request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowFilters {
    /// Requested trigger type. Echoed only.
    pub trigger: String,
    /// Requested complexity. Echoed only.
    pub complexity: String,
    /// Whether inactive workflows were excluded.
    pub active_only: bool,
}

impl From<AppliedFilters> for WorkflowFilters {
    fn from(filters: AppliedFilters) -> Self {
        Self {
            trigger: filters.trigger,
            complexity: filters.complexity,
            active_only: filters.active_only,
        }
    }
}

/// One page of workflow search results.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowPage {
    /// Workflows on this page.
    pub workflows: Vec<Workflow>,
    /// Number of matching workflows across all pages.
    pub total: usize,
    /// Current page, starting at 1.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Number of pages.
    pub pages: usize,
    /// Echo of the search text.
    pub query: String,
    /// Echo of the filters.
    pub filters: WorkflowFilters,
}

impl From<SearchPage> for WorkflowPage {
    fn from(page: SearchPage) -> Self {
        Self {
            workflows: page.workflows.into_iter().map(Workflow::from_record).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            pages: page.pages,
            query: page.query,
            filters: page.filters.into(),
        }
    }
}
