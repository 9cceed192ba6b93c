//! Futures trading route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::futures;
use crate::state::AppState;

/// Create futures trading routes
pub fn futures_routes() -> Router<AppState> {
    Router::new()
        .route("/open-position", post(futures::open_position))
        .route("/close-position", post(futures::close_position))
        .route("/funding-rate", get(futures::funding_rate))
}
