//! Request types for HTTP handlers.

mod locale;
mod paths;
mod workflows;

pub use locale::*;
pub use paths::*;
pub use workflows::*;
