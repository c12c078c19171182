//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig         # Host, port, shutdown
//! ├── middleware: MiddlewareConfig # CORS, OpenAPI, recovery/timeouts
//! └── service: ServiceConfig       # Catalog file, static directory
//! ```
//!
//! Everything can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! ```bash
//! wfdocs --port 8017 --catalog-path ./catalog.json
//! PORT=8017 CATALOG_PATH=./catalog.json wfdocs
//! ```

mod middleware;
mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use middleware::MiddlewareConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wfdocs_server::service::ServiceConfig;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "wfdocs")]
#[command(about = "Workflow documentation API server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Catalog and static file configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads the `.env` file (if enabled) and parses CLI arguments.
    ///
    /// The `.env` file is read first so clap's `env` fallbacks can see it.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with `RUST_LOG` filtering, defaulting to `info`.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.middleware
            .validate()
            .context("invalid middleware configuration")?;
        Ok(())
    }

    /// Logs the configuration.
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            static_dir = %self.service.static_dir.display(),
            catalog_path = ?self.service.catalog_path,
            "Service configuration"
        );
    }

    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
