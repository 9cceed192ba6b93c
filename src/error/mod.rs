//! Centralized API error handling for the trading gateway
//!
//! The trading endpoints themselves never fail; errors only arise at the
//! edges of the router (unmatched paths, rate limiting) and are rendered as a
//! JSON envelope with a stable error code.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Too many requests")]
    TooManyRequests,
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in the response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::TooManyRequests => "TOO_MANY_REQUESTS",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        tracing::debug!(error = %message, code = %error_code, "Client error occurred");

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: error_code.to_string(),
                message,
            },
        });

        match self {
            ApiError::TooManyRequests => (status, [(header::RETRY_AFTER, "1")], body).into_response(),
            ApiError::NotFound(_) => (status, body).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(ApiError::TooManyRequests.error_code(), "TOO_MANY_REQUESTS");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::TooManyRequests.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_too_many_requests_sets_retry_after() {
        let response = ApiError::TooManyRequests.into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "1");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            error: ErrorDetails {
                code: "NOT_FOUND".to_string(),
                message: ApiError::NotFound("/wallet/unknown".to_string()).to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "error": {
                    "code": "NOT_FOUND",
                    "message": "Resource not found: /wallet/unknown"
                }
            })
        );
    }
}
