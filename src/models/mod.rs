//! Response payloads for the trading gateway
//!
//! Every trading endpoint answers with a single-field JSON object whose value
//! is fixed. The values live here as constants so handlers and tests share
//! one source.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const BALANCE_STATUS: &str = "connected-to-node";
pub const TRANSFER_STATUS: &str = "signed-and-broadcasted";
pub const SPOT_ORDER_STATUS: &str = "spot-order-executed";
pub const ORDERBOOK_STATUS: &str = "live-liquidity-stream";
pub const POSITION_OPENED_STATUS: &str = "futures-position-opened";
pub const POSITION_CLOSED_STATUS: &str = "futures-position-closed";
pub const FUNDING_RATE_STATUS: &str = "calculated-rate";

/// `GET /wallet/balance`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BalanceResponse {
    pub balance: &'static str,
}

/// `POST /wallet/transfer`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransferResponse {
    pub status: &'static str,
}

/// `POST /spot/order`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub order: &'static str,
}

/// `GET /spot/orderbook`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderbookResponse {
    pub orderbook: &'static str,
}

/// `POST /futures/open-position` and `POST /futures/close-position`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PositionResponse {
    pub position: &'static str,
}

/// `GET /futures/funding-rate`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FundingRateResponse {
    pub funding: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
