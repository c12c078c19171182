#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for catalog loading and lookups.
pub const TRACING_TARGET_CATALOG: &str = "wfdocs_core::catalog";

mod catalog;
mod category;
mod error;
mod health;
mod locale;
mod mock;
mod query;
mod record;
mod stats;

pub use catalog::Catalog;
pub use category::{CATEGORIES, categories};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use health::{ServiceHealth, ServiceStatus};
pub use locale::Locale;
pub use query::{AppliedFilters, Pagination, SearchPage, WorkflowQuery};
pub use record::WorkflowRecord;
pub use stats::CatalogStats;
