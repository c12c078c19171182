//! Response types for HTTP handlers.
//!
//! JSON field names are snake_case on the wire (`trigger_type`,
//! `node_count`, `per_page`), error bodies excepted.

mod categories;
mod errors;
mod integrations;
mod monitors;
mod stats;
mod workflows;

pub use categories::*;
pub use errors::*;
pub use integrations::*;
pub use monitors::*;
pub use stats::*;
pub use workflows::*;
