//! Path parameter types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters for a single workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowPathParams {
    /// Workflow file name, e.g. `telegram_webhook_automation.json`.
    pub filename: String,
}
