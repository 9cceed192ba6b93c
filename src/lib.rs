//! Trading Gateway Library
//!
//! Route groups for the wallet, spot and futures surfaces of the trading
//! gateway, plus the configuration, middleware and error handling the
//! server binary is assembled from.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::Config;
pub use state::AppState;
