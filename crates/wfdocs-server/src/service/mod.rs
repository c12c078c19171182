//! Application state and dependency injection.

mod config;
mod rate_limiter;
mod static_site;

use wfdocs_core::Catalog;

pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::service::rate_limiter::{RateLimitConfig, RateLimiter};
pub use crate::service::static_site::{INDEX_PAGE, INDEX_PAGE_ZH, StaticSite};
use crate::utility::tracing_targets::TRACING_TARGET_SERVICE;
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub catalog: Catalog,
    pub static_site: StaticSite,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Loads the workflow catalog and opens the static directory.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let catalog = config.load_catalog().await?;
        let static_site = config.open_static_site()?;

        tracing::info!(
            target: TRACING_TARGET_SERVICE,
            records = catalog.len(),
            static_dir = %static_site.root().display(),
            "Service state initialized"
        );

        Ok(Self {
            catalog,
            static_site,
        })
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(catalog: Catalog);
impl_di!(static_site: StaticSite);
