//! API handlers for the trading gateway

pub mod futures;
pub mod spot;
pub mod system;
pub mod wallet;

pub use futures::{close_position, funding_rate, open_position};
pub use spot::{orderbook, place_order};
pub use system::{fallback, health_check, root};
pub use wallet::{get_balance, transfer};
