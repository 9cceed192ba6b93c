//! Futures trading API handlers
//!
//! Position requests are acknowledged without inspecting the body; the
//! funding rate is a fixed marker rather than a computed value.

use axum::Json;

use crate::models::{
    FundingRateResponse, PositionResponse, FUNDING_RATE_STATUS, POSITION_CLOSED_STATUS,
    POSITION_OPENED_STATUS,
};

/// Open a futures position
pub async fn open_position() -> Json<PositionResponse> {
    tracing::debug!("Futures position open requested");
    Json(PositionResponse {
        position: POSITION_OPENED_STATUS,
    })
}

/// Close a futures position
pub async fn close_position() -> Json<PositionResponse> {
    tracing::debug!("Futures position close requested");
    Json(PositionResponse {
        position: POSITION_CLOSED_STATUS,
    })
}

/// Current funding rate
pub async fn funding_rate() -> Json<FundingRateResponse> {
    Json(FundingRateResponse {
        funding: FUNDING_RATE_STATUS,
    })
}
