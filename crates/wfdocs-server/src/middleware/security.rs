//! Security middleware for HTTP request protection.
//!
//! CORS, security headers, response compression and a request body limit.
//! The API is read-only, so the body limit is small and CORS only allows
//! safe methods.

use std::time::Duration;

use axum::Router;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::{Method, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handler::ErrorKind;

/// Largest accepted request body. No endpoint reads one.
pub const DEFAULT_MAX_BODY_SIZE: usize = 16 * 1024;

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers CORS, security headers, compression and body limits.
    fn with_security(self, cors: &CorsConfig, headers: &SecurityHeadersConfig) -> Self;

    /// Layers security middlewares with default configurations.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig, headers: &SecurityHeadersConfig) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(cors.allow_origin())
            .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE])
            .allow_credentials(cors.credentials_allowed())
            .max_age(cors.max_age());

        let mut router = self
            .layer(RequestBodyLimitLayer::new(DEFAULT_MAX_BODY_SIZE))
            .layer(map_response(payload_too_large_as_json))
            .layer(CompressionLayer::new())
            .layer(cors_layer)
            .layer(override_header(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static(headers.frame_options.as_str()),
            ))
            .layer(override_header(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(override_header(
                header::REFERRER_POLICY,
                HeaderValue::from_static(headers.referrer_policy.as_str()),
            ));

        if let Ok(hsts) = HeaderValue::from_str(&headers.hsts_header_value()) {
            router = router.layer(override_header(header::STRICT_TRANSPORT_SECURITY, hsts));
        }

        if let Some(csp) = headers
            .content_security_policy
            .as_deref()
            .and_then(|csp| HeaderValue::from_str(csp).ok())
        {
            router = router.layer(override_header(header::CONTENT_SECURITY_POLICY, csp));
        }

        router
    }

    fn with_default_security(self) -> Self {
        self.with_security(&CorsConfig::default(), &SecurityHeadersConfig::default())
    }
}

/// Replaces the body limit's plain-text 413 with the JSON error body.
async fn payload_too_large_as_json(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ErrorKind::PayloadTooLarge.into_response();
    }

    response
}

fn override_header(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// List of allowed CORS origins.
    ///
    /// If empty, every origin is allowed.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-origins", env = "CORS_ORIGINS", value_delimiter = ',')
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum age for CORS preflight requests in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_MAX_AGE", default_value = "3600")
    )]
    pub max_age_seconds: u64,

    /// Whether to allow credentials in CORS requests.
    ///
    /// Only honored together with an explicit origin list.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ALLOW_CREDENTIALS", default_value = "false")
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Returns the CORS max age as a Duration.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Returns whether the allow list is open to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// Converts configured origins to header values. Unparsable origins
    /// are skipped.
    pub fn to_header_values(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }

    /// Returns the origin policy: any origin when none are configured,
    /// otherwise exactly the configured ones.
    pub fn allow_origin(&self) -> AllowOrigin {
        if self.allows_any_origin() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(self.to_header_values())
        }
    }

    /// Credentials cannot be combined with a wildcard origin.
    pub fn credentials_allowed(&self) -> bool {
        self.allow_credentials && !self.allows_any_origin()
    }
}

/// Security headers configuration for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct SecurityHeadersConfig {
    /// HSTS max age in seconds.
    pub hsts_max_age_seconds: u64,

    /// Whether to include subdomains in HSTS policy.
    pub hsts_include_subdomains: bool,

    /// Content Security Policy directives controlling resource loading.
    pub content_security_policy: Option<String>,

    /// X-Frame-Options value.
    pub frame_options: FrameOptions,

    /// Referrer-Policy value.
    pub referrer_policy: ReferrerPolicy,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        // The index pages load scripts and styles from jsDelivr and fonts from Google.
        Self {
            hsts_max_age_seconds: 31_536_000,
            hsts_include_subdomains: true,
            content_security_policy: Some(
                "default-src 'self'; \
                 script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
                 style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
                 img-src 'self' data: https:; \
                 connect-src 'self'; \
                 font-src 'self' https://fonts.gstatic.com; \
                 object-src 'none'; \
                 media-src 'self'; \
                 frame-src 'none'; \
                 frame-ancestors 'none'; \
                 base-uri 'self'; \
                 form-action 'self'"
                    .to_owned(),
            ),
            frame_options: FrameOptions::Deny,
            referrer_policy: ReferrerPolicy::StrictOriginWhenCrossOrigin,
        }
    }
}

impl SecurityHeadersConfig {
    /// Returns the HSTS header value as a string.
    pub fn hsts_header_value(&self) -> String {
        if self.hsts_include_subdomains {
            format!("max-age={}; includeSubDomains", self.hsts_max_age_seconds)
        } else {
            format!("max-age={}", self.hsts_max_age_seconds)
        }
    }
}

/// X-Frame-Options header values controlling frame embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameOptions {
    /// The page cannot be displayed in a frame, regardless of the site.
    Deny,
    /// The page can only be displayed in a frame on the same origin.
    SameOrigin,
}

impl FrameOptions {
    /// Returns the header value string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deny => "DENY",
            Self::SameOrigin => "SAMEORIGIN",
        }
    }
}

/// Referrer-Policy header values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferrerPolicy {
    /// No referrer information is sent.
    NoReferrer,
    /// Sends only the origin as the referrer.
    Origin,
    /// Sends full URL for same-origin, only origin for cross-origin.
    StrictOriginWhenCrossOrigin,
}

impl ReferrerPolicy {
    /// Returns the header value string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoReferrer => "no-referrer",
            Self::Origin => "origin",
            Self::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
        }
    }
}
