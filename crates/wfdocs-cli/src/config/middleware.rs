//! Middleware configuration for the HTTP server.
//!
//! The config types live in `wfdocs-server` and are flattened here so they
//! can be set through CLI arguments or environment variables.
//!
//! ```bash
//! wfdocs --cors-origins "https://example.com" --request-timeout 60
//! ```

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};
use wfdocs_server::middleware::{CorsConfig, OpenApiConfig, RecoveryConfig};
use wfdocs_server::service::RateLimitConfig;

use super::TRACING_TARGET_CONFIG;

/// Upper bound for the per-request timeout, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// CORS, OpenAPI, rate limit and recovery settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// Paths of the OpenAPI document and the Scalar UI.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,

    /// Request timeout and panic recovery.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,

    /// Per-address budget for `/api/` requests.
    #[clap(flatten)]
    pub rate_limit: RateLimitConfig,
}

impl MiddlewareConfig {
    /// Validates timeout bounds and documentation paths.
    pub fn validate(&self) -> AnyhowResult<()> {
        let timeout = self.recovery.request_timeout_secs;
        if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT_SECS {
            return Err(anyhow!(
                "Request timeout {timeout} seconds is invalid. Must be between 1 and {MAX_REQUEST_TIMEOUT_SECS} seconds."
            ));
        }

        if self.rate_limit.max_requests == 0 || self.rate_limit.window_secs == 0 {
            return Err(anyhow!(
                "Rate limit of {} requests per {} seconds is invalid. Both values must be positive.",
                self.rate_limit.max_requests,
                self.rate_limit.window_secs
            ));
        }

        for path in [&self.openapi.open_api_json, &self.openapi.scalar_ui] {
            if !path.starts_with('/') {
                return Err(anyhow!("Documentation path '{path}' must start with '/'"));
            }
        }

        Ok(())
    }

    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout_secs,
            "Recovery configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            max_requests = self.rate_limit.max_requests,
            window_secs = self.rate_limit.window_secs,
            "Rate limit configuration"
        );
    }
}
