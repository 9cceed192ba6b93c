//! Spot trading API handlers

use axum::Json;

use crate::models::{OrderResponse, OrderbookResponse, ORDERBOOK_STATUS, SPOT_ORDER_STATUS};

/// Place a spot order. The request body is not read.
pub async fn place_order() -> Json<OrderResponse> {
    tracing::debug!("Spot order received");
    Json(OrderResponse {
        order: SPOT_ORDER_STATUS,
    })
}

/// Current spot order book
pub async fn orderbook() -> Json<OrderbookResponse> {
    Json(OrderbookResponse {
        orderbook: ORDERBOOK_STATUS,
    })
}
