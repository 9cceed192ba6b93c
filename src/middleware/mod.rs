//! Middleware for the trading gateway API
//!
//! This module provides middleware for request tracing, rate limiting and
//! security headers.

mod rate_limiter;
mod security;
mod tracing;

pub use rate_limiter::{rate_limit, RateLimiter};
pub use security::{security_headers, SecurityHeaders};
pub use self::tracing::{request_tracing, REQUEST_ID_HEADER};
