//! Enhanced extractors that reject with [`Error`].
//!
//! [`Error`]: crate::handler::Error

pub mod enhanced_json;
pub mod enhanced_path;
pub mod enhanced_query;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;
