//! Service-level handlers: banner, health and the unmatched-route fallback

use axum::{
    extract::{OriginalUri, State},
    Json,
};

use crate::error::ApiError;
use crate::models::HealthResponse;
use crate::state::AppState;

pub async fn root() -> &'static str {
    "Trading Gateway API Server"
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        environment: state.config.environment.as_str(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now(),
    })
}

/// Fallback for requests that match no route
pub async fn fallback(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
