//! Wallet API handlers

use axum::Json;

use crate::models::{BalanceResponse, TransferResponse, BALANCE_STATUS, TRANSFER_STATUS};

/// Report the wallet balance
pub async fn get_balance() -> Json<BalanceResponse> {
    Json(BalanceResponse {
        balance: BALANCE_STATUS,
    })
}

/// Submit a transfer. The request body is not read.
pub async fn transfer() -> Json<TransferResponse> {
    tracing::debug!("Transfer requested");
    Json(TransferResponse {
        status: TRANSFER_STATUS,
    })
}
