//! Monitor response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wfdocs_core::{ServiceHealth, ServiceStatus};

/// Service health status.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MonitorStatus {
    /// Overall service status.
    pub status: ServiceStatus,
    /// Human readable status message.
    pub message: String,
}

impl From<ServiceHealth> for MonitorStatus {
    fn from(health: ServiceHealth) -> Self {
        Self {
            status: health.status,
            message: health.message,
        }
    }
}
