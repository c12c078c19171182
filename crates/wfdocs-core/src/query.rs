//! Workflow search parameters and the paginated result envelope.

use serde::{Deserialize, Serialize};

use crate::{Locale, WorkflowRecord};

/// Page window over a filtered result set.
///
/// Construction clamps both values into range, so a [`Pagination`] is always
/// usable: `page >= 1` and `1 <= per_page <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    /// Default page number.
    pub const DEFAULT_PAGE: u32 = 1;
    /// Default page size.
    pub const DEFAULT_PER_PAGE: u32 = 20;
    /// Largest accepted page size.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Returns a new [`Pagination`], clamping out-of-range values.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.clamp(1, i64::from(u32::MAX)) as u32,
            per_page: per_page.clamp(1, i64::from(Self::MAX_PER_PAGE)) as u32,
        }
    }

    /// Returns the 1-based page number.
    #[inline]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[inline]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the number of records before this page.
    #[inline]
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.per_page as usize)
    }

    /// Returns `ceil(total / per_page)`.
    #[inline]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// Parameters of a workflow search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct WorkflowQuery {
    /// Free-text search, matched case-insensitively against name and description.
    pub text: String,
    /// Requested trigger filter. Echoed back, not applied.
    pub trigger: String,
    /// Requested complexity filter. Echoed back, not applied.
    pub complexity: String,
    /// Keep only active workflows.
    pub active_only: bool,
    pub pagination: Pagination,
    pub locale: Locale,
}

impl Default for WorkflowQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            trigger: "all".to_owned(),
            complexity: "all".to_owned(),
            active_only: false,
            pagination: Pagination::default(),
            locale: Locale::default(),
        }
    }
}

impl WorkflowQuery {
    /// Returns a query with default parameters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the trigger filter echo.
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    /// Sets the complexity filter echo.
    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = complexity.into();
        self
    }

    /// Restricts results to active workflows.
    pub fn with_active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// Sets the page window.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the response locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the filters echoed in a [`SearchPage`].
    pub fn applied_filters(&self) -> AppliedFilters {
        AppliedFilters {
            trigger: self.trigger.clone(),
            complexity: self.complexity.clone(),
            active_only: self.active_only,
        }
    }
}

/// Filter values as received, echoed in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub trigger: String,
    pub complexity: String,
    pub active_only: bool,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Locale-adjusted records inside the page window.
    pub workflows: Vec<WorkflowRecord>,
    /// Matching records before pagination.
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    /// Number of pages, `0` when nothing matched.
    pub pages: usize,
    /// Echo of the free-text search.
    pub query: String,
    pub filters: AppliedFilters,
}
