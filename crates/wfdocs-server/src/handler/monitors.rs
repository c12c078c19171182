//! Service health handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use wfdocs_core::{Catalog, ServiceHealth};

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::MonitorStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "wfdocs_server::handler::monitors";

/// Message reported while the service is healthy.
const HEALTHY_MESSAGE: &str = "Workflow documentation API is running";

/// Reports whether the API can serve workflows.
///
/// Always answers 200; an empty catalog is reported as degraded.
#[tracing::instrument(skip_all)]
async fn health_status(State(catalog): State<Catalog>) -> Result<Json<MonitorStatus>> {
    let health = if catalog.is_empty() {
        ServiceHealth::degraded("Workflow catalog is empty")
    } else {
        ServiceHealth::healthy(HEALTHY_MESSAGE)
    };

    tracing::debug!(
        target: TRACING_TARGET,
        status = ?health.status,
        records = catalog.len(),
        "Health status checked"
    );

    Ok(Json(health.into()))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get health status")
        .description("Returns the service status and a short message.")
        .response::<200, Json<MonitorStatus>>()
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/health", get_with(health_status, health_status_docs))
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitors"))
}
