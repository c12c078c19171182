//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! ```rust
//! use aide::axum::ApiRouter;
//! use axum::routing::get;
//! use wfdocs_server::handler::{CustomRoutes, routes};
//!
//! async fn version() -> &'static str {
//!     env!("CARGO_PKG_VERSION")
//! }
//!
//! let custom_routes = CustomRoutes::new()
//!     .with_routes(ApiRouter::new().route("/api/version", get(version)));
//!
//! let router = routes(custom_routes);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod categories;
mod error;
mod integrations;
mod monitors;
mod pages;
pub mod request;
pub mod response;
mod stats;
mod utility;
mod workflows;

use aide::axum::ApiRouter;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::response::ErrorResponse;
pub use crate::handler::utility::CustomRoutes;
use crate::service::{ServiceState, StaticSite};

/// Serves remaining static files, or a JSON `not_found` error.
async fn fallback(State(static_site): State<StaticSite>, request: Request) -> Response {
    let response = static_site.serve(request).await;

    if response.status() == StatusCode::NOT_FOUND {
        return ErrorKind::NotFound.into_response();
    }

    response
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes(mut custom_routes: CustomRoutes) -> ApiRouter<ServiceState> {
    let mut router = ApiRouter::new()
        .merge(workflows::routes())
        .merge(categories::routes())
        .merge(integrations::routes())
        .merge(stats::routes())
        .merge(monitors::routes())
        .merge(pages::routes());

    if let Some(additional) = custom_routes.take_routes() {
        router = router.merge(additional);
    }

    custom_routes.map_routes(router).fallback(fallback)
}

#[cfg(test)]
mod test {
    use axum::Router;
    use axum_test::TestServer;
    use tempfile::TempDir;

    use crate::handler::{CustomRoutes, routes};
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] with the given router.
    pub async fn create_test_server_with_router(
        router: impl Fn(ServiceState) -> aide::axum::ApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config).await?;
        let router = router(state.clone());
        create_test_server_with_state(router, state).await
    }

    /// Returns a new [`TestServer`] with the given router and state.
    pub async fn create_test_server_with_state(
        router: aide::axum::ApiRouter<ServiceState>,
        state: ServiceState,
    ) -> anyhow::Result<TestServer> {
        let app: aide::axum::ApiRouter = router.with_state(state);
        let app: Router = app.into();
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the default router and state.
    pub async fn create_test_server() -> anyhow::Result<TestServer> {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config).await?;
        create_test_server_with_state(routes(CustomRoutes::new()), state).await
    }

    /// Returns a new [`TestServer`] serving the given files as its static
    /// directory. The directory lives as long as the returned [`TempDir`].
    pub async fn create_test_server_with_static_files(
        files: &[(&str, &str)],
    ) -> anyhow::Result<(TempDir, TestServer)> {
        let dir = tempfile::tempdir()?;
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents)?;
        }

        let config = ServiceConfig::builder()
            .with_static_dir(dir.path())
            .build()?;
        let state = ServiceState::from_config(&config).await?;
        let server = create_test_server_with_state(routes(CustomRoutes::new()), state).await?;
        Ok((dir, server))
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server.get("/api/unknown").await;
        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>()["name"],
            "not_found"
        );

        Ok(())
    }

    #[tokio::test]
    async fn fallback_serves_static_assets() -> anyhow::Result<()> {
        let (_dir, server) =
            create_test_server_with_static_files(&[("app.css", "body { margin: 0 }")]).await?;

        let response = server.get("/app.css").await;
        response.assert_status_ok();
        response.assert_text("body { margin: 0 }");

        Ok(())
    }

    #[tokio::test]
    async fn custom_routes_are_merged() -> anyhow::Result<()> {
        use axum::routing::get;

        let custom = CustomRoutes::new()
            .with_routes(aide::axum::ApiRouter::new().route("/api/ping", get(|| async { "pong" })));
        let state = ServiceState::from_config(&ServiceConfig::default()).await?;
        let server = create_test_server_with_state(routes(custom), state).await?;

        server.get("/api/ping").await.assert_text("pong");
        server.get("/api/stats").await.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    async fn map_fn_transforms_api_routes() -> anyhow::Result<()> {
        use aide::axum::ApiRouter;
        use axum::routing::get;

        fn add_version(router: ApiRouter<ServiceState>) -> ApiRouter<ServiceState> {
            router.route("/api/version", get(|| async { "0.1.0" }))
        }

        let custom = CustomRoutes::new().with_map_fn(add_version);
        assert!(!custom.is_empty());

        let state = ServiceState::from_config(&ServiceConfig::default()).await?;
        let server = create_test_server_with_state(routes(custom), state).await?;

        server.get("/api/version").await.assert_text("0.1.0");

        Ok(())
    }
}
