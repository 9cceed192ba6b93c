//! Spot trading route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::spot;
use crate::state::AppState;

/// Create spot trading routes
pub fn spot_routes() -> Router<AppState> {
    Router::new()
        .route("/order", post(spot::place_order))
        .route("/orderbook", get(spot::orderbook))
}
