//! Workflow search and detail handlers.
//!
//! Searching filters the catalog by activity and free text, paginates the
//! matches and rewrites descriptions for the requested language. The
//! `trigger` and `complexity` parameters are accepted and echoed back, but
//! do not narrow the results.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use wfdocs_core::Catalog;

use crate::extract::{Json, Path, Query};
use crate::handler::request::{LocaleQuery, SearchWorkflows, WorkflowPathParams};
use crate::handler::response::{ErrorResponse, Workflow, WorkflowPage};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "wfdocs_server::handler::workflows";

/// Searches and paginates workflows.
#[tracing::instrument(
    skip_all,
    fields(
        query = %request.q,
        page = request.page,
        per_page = request.per_page,
        lang = %request.lang,
    )
)]
async fn search_workflows(
    State(catalog): State<Catalog>,
    Query(request): Query<SearchWorkflows>,
) -> Result<(StatusCode, Json<WorkflowPage>)> {
    tracing::debug!(
        target: TRACING_TARGET,
        active_only = request.active_only,
        trigger = %request.trigger,
        complexity = %request.complexity,
        "Searching workflows"
    );

    let query = request.into_query()?;
    let page = catalog.search(&query);

    tracing::debug!(
        target: TRACING_TARGET,
        total = page.total,
        returned = page.workflows.len(),
        pages = page.pages,
        "Workflows searched"
    );

    Ok((StatusCode::OK, Json(page.into())))
}

fn search_workflows_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Search workflows")
        .description(
            "Returns one page of workflows whose name or description contains `q` \
            (case-insensitive). `active_only` (`true`/`1`/`yes`/`on`) excludes inactive \
            workflows. `page` is clamped to at least 1 and `per_page` to 1..=100; a `page` \
            above 4294967295 is rejected. With `lang=zh` descriptions are returned in Chinese.",
        )
        .response::<200, Json<WorkflowPage>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Returns a single workflow by file name.
#[tracing::instrument(
    skip_all,
    fields(filename = %path_params.filename, lang = %locale_query.lang)
)]
async fn read_workflow(
    State(catalog): State<Catalog>,
    Path(path_params): Path<WorkflowPathParams>,
    Query(locale_query): Query<LocaleQuery>,
) -> Result<(StatusCode, Json<Workflow>)> {
    tracing::debug!(target: TRACING_TARGET, "Reading workflow");

    let Some(record) = catalog.get(&path_params.filename) else {
        tracing::debug!(target: TRACING_TARGET, "Workflow not found");
        return Err(ErrorKind::NotFound
            .with_message("Workflow not found")
            .with_resource("workflow")
            .with_context(format!("filename: {}", path_params.filename)));
    };

    let workflow = Workflow::from_record(record.localized(locale_query.locale()));

    tracing::debug!(target: TRACING_TARGET, id = workflow.id, "Workflow read");

    Ok((StatusCode::OK, Json(workflow)))
}

fn read_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get workflow")
        .description(
            "Returns the workflow with the given file name, with the description \
            translated when `lang=zh`.",
        )
        .response::<200, Json<Workflow>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all workflow routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/workflows",
            get_with(search_workflows, search_workflows_docs),
        )
        .api_route(
            "/api/workflows/{filename}",
            get_with(read_workflow, read_workflow_docs),
        )
        .with_path_items(|item| item.tag("Workflows"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::{create_test_server_with_router, create_test_server_with_state};
    use crate::service::ServiceConfig;

    const TELEGRAM: &str = "telegram_webhook_automation.json";
    const SHEETS: &str = "google_sheets_automation.json";

    #[tokio::test]
    async fn default_search_returns_everything() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/workflows").await;
        response.assert_status_ok();

        let page = response.json::<WorkflowPage>();
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 20);
        assert_eq!(page.pages, 1);
        assert_eq!(page.query, "");
        assert_eq!(page.filters.trigger, "all");
        assert_eq!(page.filters.complexity, "all");
        assert!(!page.filters.active_only);

        let ids: Vec<i64> = page.workflows.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn text_search_is_case_insensitive() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("q", "TELEGRAM")
            .await;
        response.assert_status_ok();

        let page = response.json::<WorkflowPage>();
        assert_eq!(page.total, 1);
        assert_eq!(page.query, "TELEGRAM");
        assert_eq!(page.workflows[0].filename, TELEGRAM);

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("page", 5)
            .add_query_param("per_page", 20)
            .await;
        response.assert_status_ok();

        let page = response.json::<WorkflowPage>();
        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
        assert_eq!(page.page, 5);
        assert!(page.workflows.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn pagination_is_clamped() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("page", 0)
            .add_query_param("per_page", 500)
            .await;
        response.assert_status_ok();

        let page = response.json::<WorkflowPage>();
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 100);

        let response = server
            .get("/api/workflows")
            .add_query_param("per_page", 1)
            .add_query_param("page", 2)
            .await;
        let page = response.json::<WorkflowPage>();
        assert_eq!(page.pages, 2);
        assert_eq!(page.workflows.len(), 1);
        assert_eq!(page.workflows[0].filename, SHEETS);

        Ok(())
    }

    #[tokio::test]
    async fn trigger_and_complexity_are_echoed_only() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("trigger", "Scheduled")
            .add_query_param("complexity", "high")
            .await;
        response.assert_status_ok();

        let page = response.json::<WorkflowPage>();
        assert_eq!(page.total, 2);
        assert_eq!(page.filters.trigger, "Scheduled");
        assert_eq!(page.filters.complexity, "high");

        Ok(())
    }

    #[tokio::test]
    async fn chinese_descriptions_are_translated() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("lang", "zh")
            .await;
        response.assert_status_ok();

        let page = response.json::<WorkflowPage>();
        let sheets = page
            .workflows
            .iter()
            .find(|w| w.filename == SHEETS)
            .expect("sheets workflow");
        assert!(sheets.description.contains("个节点"));
        assert!(sheets.description.contains("个服务"));
        assert!(!sheets.description.contains("nodes"));
        assert!(!sheets.description.contains("services"));
        assert_eq!(sheets.name, "Google Sheets Data Processing");

        Ok(())
    }

    #[tokio::test]
    async fn malformed_page_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("page", "abc")
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["name"],
            "bad_request"
        );

        Ok(())
    }

    #[tokio::test]
    async fn active_only_accepts_numeric_and_word_flags() -> anyhow::Result<()> {
        let mut records = Catalog::builtin().records().to_vec();
        records[1].active = false;

        let mut state = ServiceState::from_config(&ServiceConfig::default()).await?;
        state.catalog = Catalog::from_records(records)?;
        let server = create_test_server_with_state(routes(), state).await?;

        for flag in ["true", "1", "yes", "ON"] {
            let response = server
                .get("/api/workflows")
                .add_query_param("active_only", flag)
                .await;
            response.assert_status_ok();

            let page = response.json::<WorkflowPage>();
            assert!(page.filters.active_only, "{flag}");
            assert_eq!(page.total, 1, "{flag}");
            assert!(page.workflows.iter().all(|w| w.active), "{flag}");
            assert_eq!(page.workflows[0].filename, TELEGRAM);
        }

        for flag in ["false", "0"] {
            let response = server
                .get("/api/workflows")
                .add_query_param("active_only", flag)
                .await;
            assert_eq!(response.json::<WorkflowPage>().total, 2, "{flag}");
        }

        server
            .get("/api/workflows")
            .add_query_param("active_only", "maybe")
            .await
            .assert_status_bad_request();

        Ok(())
    }

    #[tokio::test]
    async fn page_beyond_u32_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/api/workflows")
            .add_query_param("page", "99999999999")
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["name"],
            "bad_request"
        );

        let response = server
            .get("/api/workflows")
            .add_query_param("page", "4294967295")
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<WorkflowPage>().page, 4_294_967_295);

        Ok(())
    }

    #[tokio::test]
    async fn read_workflow_by_filename() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get(&format!("/api/workflows/{SHEETS}")).await;
        response.assert_status_ok();
        let workflow = response.json::<Workflow>();
        assert_eq!(workflow.id, 2);
        assert_eq!(workflow.created_at, "");

        let response = server
            .get(&format!("/api/workflows/{SHEETS}"))
            .add_query_param("lang", "zh")
            .await;
        assert!(response.json::<Workflow>().description.contains("定时自动化流程"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_workflow_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/workflows/missing.json").await;
        response.assert_status_not_found();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "not_found");
        assert_eq!(body["resource"], "workflow");

        Ok(())
    }
}
