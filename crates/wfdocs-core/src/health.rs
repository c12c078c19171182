//! Service health reporting.

use serde::{Deserialize, Serialize};

/// Represents the operational status of a service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is operating normally
    #[default]
    Healthy,
    /// Service answers, but without any workflows to serve
    Degraded,
}

/// Health information for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Current service status
    pub status: ServiceStatus,
    /// Message describing the current state
    pub message: String,
}

impl ServiceHealth {
    /// Creates a new healthy service health report.
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Healthy,
            message: message.into(),
        }
    }

    /// Creates a new degraded service health report.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let health = ServiceHealth::healthy("running");
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["message"], "running");
    }

    #[test]
    fn degraded_serializes_lowercase() {
        let health = ServiceHealth::degraded("Workflow catalog is empty");
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["status"], "degraded");
    }
}
