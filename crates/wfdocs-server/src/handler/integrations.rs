//! Integration listing handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use wfdocs_core::Catalog;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::Integrations;
use crate::service::ServiceState;

/// Tracing target for integration operations.
const TRACING_TARGET: &str = "wfdocs_server::handler::integrations";

/// Lists every integration used by a workflow.
#[tracing::instrument(skip_all)]
async fn list_integrations(
    State(catalog): State<Catalog>,
) -> Result<(StatusCode, Json<Integrations>)> {
    let integrations: Integrations = catalog
        .integrations()
        .into_iter()
        .map(str::to_owned)
        .collect();

    tracing::debug!(
        target: TRACING_TARGET,
        count = integrations.len(),
        "Integrations listed"
    );

    Ok((StatusCode::OK, Json(integrations)))
}

fn list_integrations_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List integrations")
        .description("Returns the distinct integration names used by the workflows, sorted.")
        .response::<200, Json<Integrations>>()
}

/// Returns a [`Router`] with all integration routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/integrations",
            get_with(list_integrations, list_integrations_docs),
        )
        .with_path_items(|item| item.tag("Integrations"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn integrations_are_sorted_and_unique() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/integrations").await;
        response.assert_status_ok();

        let integrations = response.json::<Integrations>();
        assert_eq!(
            integrations,
            vec![
                "Gmail",
                "Google Sheets",
                "HTTP Request",
                "Slack",
                "Telegram",
                "Webhook",
            ]
        );

        Ok(())
    }
}
