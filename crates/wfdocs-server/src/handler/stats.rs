//! Catalog statistics handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::Stats;
use crate::service::ServiceState;

/// Returns the published collection statistics.
#[tracing::instrument(skip_all)]
async fn read_stats() -> Result<(StatusCode, Json<Stats>)> {
    Ok((StatusCode::OK, Json(Stats::PUBLISHED)))
}

fn read_stats_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get statistics")
        .description(
            "Returns headline numbers for the published workflow collection: workflow, \
            active workflow, node and integration counts.",
        )
        .response::<200, Json<Stats>>()
}

/// Returns a [`Router`] with all statistics routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/stats", get_with(read_stats, read_stats_docs))
        .with_path_items(|item| item.tag("Stats"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn stats_are_constant() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/stats").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "total": 2055,
            "active": 1847,
            "total_nodes": 29445,
            "unique_integrations": 365,
        }));

        Ok(())
    }
}
