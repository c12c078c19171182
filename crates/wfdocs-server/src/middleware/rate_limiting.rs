//! IP-based rate limiting for the `/api/` routes.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Router;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Response};

use crate::service::RateLimiter;

/// Prefix of the routes that count against the budget.
const LIMITED_PREFIX: &str = "/api/";

/// Extension trait for `axum::`[`Router`] to apply rate limiting.
pub trait RouterRateLimitExt<S> {
    /// Limits `/api/` requests per client address with `limiter`.
    fn with_rate_limit(self, limiter: RateLimiter) -> Self;
}

impl<S> RouterRateLimitExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_rate_limit(self, limiter: RateLimiter) -> Self {
        self.layer(from_fn_with_state(limiter, rate_limit_by_ip))
    }
}

/// Rejects `/api/` requests once the client address is out of budget.
///
/// Without connection info (in-process tests) every request shares the
/// unspecified address.
async fn rate_limit_by_ip(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    if !request.uri().path().starts_with(LIMITED_PREFIX) {
        return next.run(request).await;
    }

    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |ConnectInfo(addr)| {
            addr.ip()
        });

    match limiter.check(client_ip).await {
        Ok(()) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;
    use crate::service::RateLimitConfig;

    fn app(max_requests: u32) -> Router {
        let limiter = RateLimiter::new(RateLimitConfig::new(
            max_requests,
            Duration::from_secs(900),
        ));

        Router::new()
            .route("/api/stats", get(|| async { "stats" }))
            .route("/health", get(|| async { "ok" }))
            .with_rate_limit(limiter)
    }

    #[tokio::test]
    async fn api_requests_over_budget_are_rejected() -> anyhow::Result<()> {
        let server = TestServer::new(app(3))?;

        for _ in 0..3 {
            server.get("/api/stats").await.assert_status_ok();
        }

        let response = server.get("/api/stats").await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "too_many_requests");
        assert_eq!(
            body["message"],
            "Too many requests from this IP, please try again later."
        );

        Ok(())
    }

    #[tokio::test]
    async fn routes_outside_api_are_not_counted() -> anyhow::Result<()> {
        let server = TestServer::new(app(1))?;

        for _ in 0..5 {
            server.get("/health").await.assert_status_ok();
        }
        server.get("/api/stats").await.assert_status_ok();
        server
            .get("/api/stats")
            .await
            .assert_status(StatusCode::TOO_MANY_REQUESTS);

        Ok(())
    }
}
