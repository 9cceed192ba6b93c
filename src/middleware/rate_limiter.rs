//! Rate limiting middleware

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{sync::RwLock, task::JoinHandle};

use super::tracing::client_ip;
use crate::error::ApiError;

type Buckets = Arc<RwLock<HashMap<String, TokenBucket>>>;

/// Token bucket for rate limiting
#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(max_tokens: f64) -> Self {
        Self {
            tokens: max_tokens,
            last_update: Instant::now(),
        }
    }

    fn try_consume(&mut self, tokens_per_second: f64, max_tokens: f64) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        self.tokens = (self.tokens + elapsed * tokens_per_second).min(max_tokens);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Per-client token bucket limiter, refilled at `requests_per_second` with a
/// burst of twice that.
///
/// Clients are keyed by peer address. Proxy headers are only consulted when
/// [`RateLimiter::trust_proxy_headers`] is set, since any direct client can
/// put arbitrary values in them.
#[derive(Clone)]
pub struct RateLimiter {
    buckets: Buckets,
    tokens_per_second: f64,
    max_tokens: f64,
    trust_proxy_headers: bool,
}

impl RateLimiter {
    pub fn new(requests_per_second: u32) -> Self {
        let rps = f64::from(requests_per_second);
        Self {
            buckets: Arc::new(RwLock::new(HashMap::new())),
            tokens_per_second: rps,
            max_tokens: rps * 2.0,
            trust_proxy_headers: false,
        }
    }

    /// Key clients on `x-forwarded-for` / `x-real-ip` when present
    pub fn trust_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }

    /// Check if a request is allowed
    pub async fn check(&self, key: &str) -> bool {
        let mut buckets = self.buckets.write().await;

        let bucket = buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket::new(self.max_tokens));

        bucket.try_consume(self.tokens_per_second, self.max_tokens)
    }

    /// Drop buckets idle for longer than `max_age`
    pub async fn cleanup(&self, max_age: Duration) {
        prune(&self.buckets, max_age).await;
    }

    /// Prune idle buckets every `period` on a background task.
    ///
    /// The task holds only a weak reference and exits once every clone of
    /// the limiter has been dropped.
    pub fn spawn_cleanup(&self, period: Duration, max_age: Duration) -> JoinHandle<()> {
        let buckets = Arc::downgrade(&self.buckets);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(buckets) = buckets.upgrade() else {
                    break;
                };
                prune(&buckets, max_age).await;
            }

            tracing::debug!("Rate limiter cleanup task stopped");
        })
    }

    pub async fn tracked_clients(&self) -> usize {
        self.buckets.read().await.len()
    }

    fn client_key(&self, request: &Request) -> String {
        if self.trust_proxy_headers {
            if let Some(ip) = client_ip(request.headers()) {
                return ip;
            }
        }

        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

async fn prune(buckets: &RwLock<HashMap<String, TokenBucket>>, max_age: Duration) {
    let mut buckets = buckets.write().await;
    let before = buckets.len();
    let now = Instant::now();

    buckets.retain(|_, bucket| now.duration_since(bucket.last_update) < max_age);

    let removed = before - buckets.len();
    if removed > 0 {
        tracing::debug!(removed, remaining = buckets.len(), "Pruned idle rate limit buckets");
    }
}

/// Rate limiting middleware
pub async fn rate_limit(
    State(rate_limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let client_key = rate_limiter.client_key(&request);

    if !rate_limiter.check(&client_key).await {
        tracing::warn!(client = %client_key, "Rate limit exceeded");
        return ApiError::TooManyRequests.into_response();
    }

    next.run(request).await
}
