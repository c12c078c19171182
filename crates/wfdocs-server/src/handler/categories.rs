//! Category listing handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::{Json, Query};
use crate::handler::Result;
use crate::handler::request::LocaleQuery;
use crate::handler::response::{Categories, CategoryMappings};
use crate::service::ServiceState;

/// Tracing target for category operations.
const TRACING_TARGET: &str = "wfdocs_server::handler::categories";

/// Lists the workflow categories.
#[tracing::instrument(skip_all, fields(lang = %locale_query.lang))]
async fn list_categories(
    Query(locale_query): Query<LocaleQuery>,
) -> Result<(StatusCode, Json<Categories>)> {
    let categories: Vec<String> = wfdocs_core::categories(locale_query.locale())
        .into_iter()
        .map(str::to_owned)
        .collect();

    tracing::debug!(
        target: TRACING_TARGET,
        count = categories.len(),
        "Categories listed"
    );

    Ok((StatusCode::OK, Json(Categories { categories })))
}

fn list_categories_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List categories")
        .description(
            "Returns the workflow categories in display order. With `lang=zh` every \
            category with a Chinese name is translated.",
        )
        .response::<200, Json<Categories>>()
}

/// Returns the workflow to category mapping.
#[tracing::instrument(skip_all)]
async fn list_category_mappings() -> Result<(StatusCode, Json<CategoryMappings>)> {
    tracing::debug!(target: TRACING_TARGET, "Category mappings listed");
    Ok((StatusCode::OK, Json(CategoryMappings::default())))
}

fn list_category_mappings_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List category mappings")
        .description("Returns the mapping from workflow file name to category. Currently empty.")
        .response::<200, Json<CategoryMappings>>()
}

/// Returns a [`Router`] with all category routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/categories",
            get_with(list_categories, list_categories_docs),
        )
        .api_route(
            "/api/category-mappings",
            get_with(list_category_mappings, list_category_mappings_docs),
        )
        .with_path_items(|item| item.tag("Categories"))
}
