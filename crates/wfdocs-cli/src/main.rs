#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use wfdocs_server::handler::{CustomRoutes, routes};
use wfdocs_server::middleware::{
    RouterObservabilityExt, RouterOpenApiExt, RouterRateLimitExt, RouterRecoveryExt,
    RouterSecurityExt, SecurityHeadersConfig,
};
use wfdocs_server::service::{RateLimiter, ServiceConfig, ServiceState};

use crate::config::{Cli, MiddlewareConfig};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "wfdocs_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "wfdocs_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "wfdocs_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    Cli::init_tracing();

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting workflow documentation server"
    );

    cli.log();
    cli.validate()?;

    let state = create_service_state(&cli.service).await?;
    let router = create_router(state, &cli.middleware);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Loads the catalog and opens the static directory.
async fn create_service_state(config: &ServiceConfig) -> anyhow::Result<ServiceState> {
    let state = ServiceState::from_config(config)
        .await
        .context("failed to create service state")?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        records = state.catalog.len(),
        static_dir = %state.static_site.root().display(),
        "service state ready"
    );

    Ok(state)
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Metrics - per-request timing events
/// 4. Security - CORS, security headers, compression
/// 5. Rate limiting - per-address budget on `/api/` routes
/// 6. Routes (innermost) - API handlers, docs and static pages
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    let api_routes: Router = routes(CustomRoutes::new())
        .with_open_api(middleware.openapi.clone())
        .with_state(state);

    api_routes
        .with_rate_limit(RateLimiter::new(middleware.rate_limit))
        .with_security(&middleware.cors, &SecurityHeadersConfig::default())
        .with_metrics()
        .with_observability()
        .with_recovery(&middleware.recovery)
}
