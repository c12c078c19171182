//! Per-address request budgets using a token bucket.

use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::handler::{Error, ErrorKind};
use crate::utility::tracing_targets::TRACING_TARGET_RATE_LIMIT;

type Buckets = Arc<Mutex<HashMap<IpAddr, TokenBucket>>>;

/// How often idle buckets are dropped.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Request budget applied to every client address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RateLimitConfig {
    /// Requests one address may send per window.
    #[cfg_attr(
        feature = "config",
        arg(long = "rate-limit-max", env = "RATE_LIMIT_MAX", default_value = "1000")
    )]
    pub max_requests: u32,

    /// Window length in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "rate-limit-window", env = "RATE_LIMIT_WINDOW", default_value = "900")
    )]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 1000,
            window_secs: 15 * 60,
        }
    }
}

impl RateLimitConfig {
    /// Creates a budget of `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window_secs: window.as_secs(),
        }
    }

    /// Tokens regained per second.
    fn refill_rate(&self) -> f64 {
        f64::from(self.max_requests) / self.window_secs.max(1) as f64
    }
}

#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn full(config: &RateLimitConfig) -> Self {
        Self {
            tokens: f64::from(config.max_requests),
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self, config: &RateLimitConfig) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens =
            (self.tokens + elapsed * config.refill_rate()).min(f64::from(config.max_requests));
        self.last_refill = now;
    }

    fn is_full(&self, config: &RateLimitConfig) -> bool {
        self.tokens >= f64::from(config.max_requests)
    }

    /// Seconds until one token is available again.
    fn retry_after(&self, config: &RateLimitConfig) -> u64 {
        let missing = (1.0 - self.tokens).max(0.0);
        (missing / config.refill_rate()).ceil() as u64
    }
}

/// In-memory rate limiter keyed by client IP address.
///
/// Cloning shares the buckets. A background task drops idle buckets and
/// stops once the last clone is gone.
#[derive(Clone)]
pub struct RateLimiter {
    buckets: Buckets,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Creates a limiter and spawns its cleanup task.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: RateLimitConfig) -> Self {
        let buckets = Buckets::default();
        spawn_cleanup(Arc::downgrade(&buckets), config);

        tracing::info!(
            target: TRACING_TARGET_RATE_LIMIT,
            max_requests = config.max_requests,
            window_secs = config.window_secs,
            "Rate limiter initialized"
        );

        Self { buckets, config }
    }

    /// Spends one token for `ip`, or fails with `too_many_requests`.
    pub async fn check(&self, ip: IpAddr) -> Result<(), Error> {
        let mut buckets = self.buckets.lock().await;
        let bucket = buckets
            .entry(ip)
            .or_insert_with(|| TokenBucket::full(&self.config));

        bucket.refill(&self.config);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return Ok(());
        }

        let retry_after = bucket.retry_after(&self.config);
        tracing::warn!(
            target: TRACING_TARGET_RATE_LIMIT,
            client_ip = %ip,
            retry_after_secs = retry_after,
            "Rate limit exceeded"
        );

        Err(Error::new(ErrorKind::TooManyRequests)
            .with_suggestion(format!("Retry in {retry_after} seconds"))
            .with_context(format!("client {ip} exhausted its request budget")))
    }

    /// Returns the number of tracked addresses.
    pub async fn tracked(&self) -> usize {
        self.buckets.lock().await.len()
    }
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn spawn_cleanup(buckets: Weak<Mutex<HashMap<IpAddr, TokenBucket>>>, config: RateLimitConfig) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        interval.tick().await;

        loop {
            interval.tick().await;
            let Some(buckets) = buckets.upgrade() else {
                break;
            };

            let mut buckets = buckets.lock().await;
            let before = buckets.len();
            buckets.retain(|_, bucket| {
                bucket.refill(&config);
                !bucket.is_full(&config)
            });

            let removed = before - buckets.len();
            if removed > 0 {
                tracing::debug!(
                    target: TRACING_TARGET_RATE_LIMIT,
                    removed,
                    remaining = buckets.len(),
                    "Dropped idle rate limit buckets"
                );
            }
        }
    });
}
