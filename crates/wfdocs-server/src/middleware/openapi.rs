//! OpenAPI document generation with a Scalar UI.
//!
//! The document is produced by [`aide`] from the documented routes of an
//! [`ApiRouter`] and served as JSON next to an interactive Scalar page.
//!
//! ```rust
//! use aide::axum::ApiRouter;
//! use axum::Router;
//! use wfdocs_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//!
//! let app: Router<()> = ApiRouter::new()
//!     .with_open_api(OpenApiConfig::default());
//! ```
//!
//! [`aide`]: https://docs.rs/aide
//! [`ApiRouter`]: aide::axum::ApiRouter

use aide::axum::ApiRouter;
use aide::openapi::{Info, License, OpenApi, Tag};
use aide::scalar::Scalar;
use axum::routing::{Router, get};
use axum::{Extension, Json};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// OpenAPI configuration for aide integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenApiConfig {
    /// Path which exposes the OpenAPI JSON document.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_JSON_PATH", default_value = "/api/openapi.json")
    )]
    pub open_api_json: String,

    /// Path which exposes the Scalar API reference UI.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_SCALAR_PATH", default_value = "/api/scalar")
    )]
    pub scalar_ui: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            open_api_json: "/api/openapi.json".to_owned(),
            scalar_ui: "/api/scalar".to_owned(),
        }
    }
}

/// Extension trait for [`ApiRouter`] to add OpenAPI documentation with Scalar UI.
///
/// [`ApiRouter`]: aide::axum::ApiRouter
pub trait RouterOpenApiExt<S> {
    /// Finishes the router with the default API info and serves the
    /// document and the Scalar UI at the configured paths.
    fn with_open_api(self, config: OpenApiConfig) -> Router<S>;

    /// Same as [`with_open_api`], with a caller-provided [`Info`].
    ///
    /// [`with_open_api`]: RouterOpenApiExt::with_open_api
    /// [`Info`]: aide::openapi::Info
    fn with_open_api_info(self, config: OpenApiConfig, info: Info) -> Router<S>;
}

impl<S> RouterOpenApiExt<S> for ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_open_api(self, config: OpenApiConfig) -> Router<S> {
        let info = Info {
            title: "Workflow Documentation API".to_owned(),
            summary: Some("Searchable documentation for automation workflows".to_owned()),
            description: Some(
                "Lists, searches and paginates documented automation workflows, with \
                English and Chinese descriptions, category listings and catalog statistics."
                    .to_owned(),
            ),
            license: Some(License {
                name: "MIT".to_owned(),
                identifier: Some("MIT".to_owned()),
                ..License::default()
            }),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Info::default()
        };

        self.with_open_api_info(config, info)
    }

    fn with_open_api_info(self, config: OpenApiConfig, info: Info) -> Router<S> {
        async fn serve_openapi(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
            Json(api)
        }

        let tags = ["Workflows", "Categories", "Integrations", "Stats", "Monitors"]
            .into_iter()
            .map(|name| Tag {
                name: name.to_owned(),
                ..Tag::default()
            })
            .collect();

        let mut api = OpenApi {
            info,
            tags,
            ..OpenApi::default()
        };

        let scalar = Scalar::new(&config.open_api_json);
        let router = self
            .route(&config.scalar_ui, scalar.axum_route())
            .route(&config.open_api_json, get(serve_openapi));

        router.finish_api(&mut api).layer(Extension(api))
    }
}
