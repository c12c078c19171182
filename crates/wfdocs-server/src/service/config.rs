use std::path::PathBuf;

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use wfdocs_core::Catalog;

use crate::service::{Result, StaticSite};
use crate::utility::tracing_targets::TRACING_TARGET_SERVICE;

/// Default values for configuration options.
mod defaults {
    use std::path::PathBuf;

    /// Default directory holding the index pages and SEO files.
    pub fn static_dir() -> PathBuf {
        "./static".into()
    }
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct ServiceConfig {
    /// Directory with `index.html`, `index-zh.html` and the SEO files.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "STATIC_DIR", default_value = "./static")
    )]
    #[builder(default = "defaults::static_dir()")]
    pub static_dir: PathBuf,

    /// JSON file with the workflow catalog. The built-in catalog is used
    /// when unset.
    #[cfg_attr(feature = "config", arg(long, env = "CATALOG_PATH"))]
    #[builder(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            static_dir: defaults::static_dir(),
            catalog_path: None,
        }
    }
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Loads the workflow catalog from `catalog_path`, or returns the
    /// built-in one.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = self.catalog_path.as_deref() else {
            tracing::debug!(
                target: TRACING_TARGET_SERVICE,
                "Using built-in workflow catalog"
            );
            return Ok(Catalog::builtin());
        };

        Ok(Catalog::load(path).await?)
    }

    /// Opens the static site rooted at `static_dir`.
    pub fn open_static_site(&self) -> Result<StaticSite> {
        StaticSite::new(&self.static_dir)
    }
}

impl ServiceConfigBuilder {
    /// Wrapper for builder validation that returns String errors.
    fn validate(builder: &ServiceConfigBuilder) -> Result<(), String> {
        if let Some(static_dir) = &builder.static_dir
            && static_dir.as_os_str().is_empty()
        {
            return Err("Static directory cannot be empty".to_string());
        }

        if let Some(Some(catalog_path)) = &builder.catalog_path
            && catalog_path.as_os_str().is_empty()
        {
            return Err("Catalog path cannot be empty".to_string());
        }

        Ok(())
    }
}
