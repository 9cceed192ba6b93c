//! Application assembly: routes, fallback and middleware stack

use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::handlers::{fallback, health_check, root};
use crate::middleware::{self, RateLimiter, SecurityHeaders};
use crate::routes;
use crate::state::AppState;

/// Idle rate limit buckets older than this are pruned
const RATE_LIMIT_IDLE_TTL: Duration = Duration::from_secs(300);
const RATE_LIMIT_CLEANUP_PERIOD: Duration = Duration::from_secs(60);

/// Build the complete application router for the given state.
///
/// Layers run outermost first: CORS, request tracing, security headers,
/// rate limiting. A rejected request is therefore still traced and hardened.
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app: Router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(routes::api_routes())
        .fallback(fallback)
        .with_state(state);

    if let Some(limiter) = rate_limiter(&config) {
        app = app.layer(from_fn_with_state(limiter, middleware::rate_limit));
    }

    app.layer(from_fn_with_state(
        SecurityHeaders::for_environment(config.environment),
        middleware::security_headers,
    ))
    .layer(from_fn(middleware::request_tracing))
    .layer(configure_cors(&config))
}

fn rate_limiter(config: &Config) -> Option<RateLimiter> {
    let rps = config.rate_limit_rps?;
    let limiter = RateLimiter::new(rps).trust_proxy_headers(config.trust_proxy_headers);

    tracing::info!(
        requests_per_second = rps,
        trust_proxy_headers = config.trust_proxy_headers,
        "Rate limiting enabled"
    );

    if tokio::runtime::Handle::try_current().is_ok() {
        limiter.spawn_cleanup(RATE_LIMIT_CLEANUP_PERIOD, RATE_LIMIT_IDLE_TTL);
    } else {
        tracing::warn!("No tokio runtime, idle rate limit buckets will not be pruned");
    }

    Some(limiter)
}

fn configure_cors(config: &Config) -> CorsLayer {
    let Some(allowed_origins) = config.cors_allowed_origins.as_deref() else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    };

    let origins = parse_origins(allowed_origins);
    if origins.is_empty() {
        tracing::warn!("No valid CORS origins configured, cross-origin requests will be refused");
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

fn parse_origins(allowed_origins: &str) -> Vec<HeaderValue> {
    allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = ?s, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
