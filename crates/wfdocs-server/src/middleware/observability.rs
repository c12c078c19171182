//! Observability middleware for tracing and request metrics.
//!
//! Every request gets an `x-request-id` (generated when absent and echoed in
//! the response), a `TraceLayer` span with sensitive headers redacted, and a
//! pair of metric trace events tagged with its [`RouteCategory`].

use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::http::{HeaderMap, header};
use axum::middleware::{Next, from_fn};
use axum::response::Response;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

use crate::utility::RouteCategory;
use crate::utility::tracing_targets::TRACING_TARGET_METRICS;

/// Header carrying the request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait for `axum::`[`Router`] to apply observability middleware.
pub trait RouterObservabilityExt<S> {
    /// Layers request ids, tracing spans and sensitive header redaction.
    fn with_observability(self) -> Self;

    /// Layers per-request metric events with timing and body sizes.
    fn with_metrics(self) -> Self;
}

impl<S> RouterObservabilityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        let request_id = header::HeaderName::from_static(REQUEST_ID_HEADER);

        self.layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetSensitiveRequestHeadersLayer::new([
                header::AUTHORIZATION,
                header::COOKIE,
            ]))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }

    fn with_metrics(self) -> Self {
        self.layer(ServiceBuilder::new().layer(from_fn(track_categorized_metrics)))
    }
}

/// Request metrics middleware with categorization and timing.
///
/// The client address is only known when the server was started with
/// `into_make_service_with_connect_info`.
async fn track_categorized_metrics(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let category = RouteCategory::from_uri(&uri);
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();
    let request_size = content_length(request.headers());

    tracing::trace!(
        target: TRACING_TARGET_METRICS,
        method = %method,
        uri = %uri,
        category = category.as_str(),
        client_ip = %client_ip,
        request_size = request_size,
        "request started"
    );

    let response = next.run(request).await;
    let duration = start_time.elapsed();

    tracing::trace!(
        target: TRACING_TARGET_METRICS,
        method = %method,
        uri = %uri,
        category = category.as_str(),
        status = %response.status(),
        duration_ms = duration.as_millis() as u64,
        client_ip = %client_ip,
        request_size = request_size,
        response_size = content_length(response.headers()),
        "request completed"
    );

    response
}

fn content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/api/stats", get(|| async { "ok" }))
            .with_metrics()
            .with_observability()
    }

    #[tokio::test]
    async fn request_id_is_generated() -> anyhow::Result<()> {
        let server = TestServer::new(app())?;

        let response = server.get("/api/stats").await;
        response.assert_status_ok();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_propagated() -> anyhow::Result<()> {
        let server = TestServer::new(app())?;

        let response = server
            .get("/api/stats")
            .add_header(REQUEST_ID_HEADER, "req-123")
            .await;
        assert_eq!(response.header(REQUEST_ID_HEADER), "req-123");

        Ok(())
    }

    #[test]
    fn content_length_defaults_to_zero() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_length(&headers), 0);

        headers.insert(header::CONTENT_LENGTH, "42".parse().unwrap());
        assert_eq!(content_length(&headers), 42);
    }
}
