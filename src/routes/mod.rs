//! Route definitions for the trading gateway API

use axum::Router;

use crate::state::AppState;

mod futures;
mod spot;
mod wallet;

pub use futures::futures_routes;
pub use spot::spot_routes;
pub use wallet::wallet_routes;

/// Mount every route group under its prefix
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/wallet", wallet_routes())
        .nest("/spot", spot_routes())
        .nest("/futures", futures_routes())
}
