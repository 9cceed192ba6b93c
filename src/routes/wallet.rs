//! Wallet route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::wallet;
use crate::state::AppState;

/// Create wallet routes
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route("/balance", get(wallet::get_balance))
        .route("/transfer", post(wallet::transfer))
}
