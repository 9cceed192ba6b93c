//! Response hardening headers

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::config::Environment;

/// Headers set on every response
const BASELINE_HEADERS: [(HeaderName, &str); 6] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::REFERRER_POLICY, "no-referrer"),
    // Quotes, balances and order acks must never be served from a cache
    (header::CACHE_CONTROL, "no-store"),
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'none'; frame-ancestors 'none'",
    ),
    (
        HeaderName::from_static("permissions-policy"),
        "geolocation=(), microphone=(), camera=()",
    ),
];

const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";

/// Header policy for the gateway's responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityHeaders {
    hsts: bool,
}

impl SecurityHeaders {
    /// HSTS is only sent in production, where the gateway sits behind TLS
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            hsts: environment.is_production(),
        }
    }

    /// Add the policy headers, leaving any a handler already set untouched
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in BASELINE_HEADERS {
            headers
                .entry(name)
                .or_insert(HeaderValue::from_static(value));
        }

        if self.hsts {
            headers
                .entry(header::STRICT_TRANSPORT_SECURITY)
                .or_insert(HeaderValue::from_static(HSTS_VALUE));
        }
    }
}

/// Middleware applying [`SecurityHeaders`] to every response
pub async fn security_headers(
    State(policy): State<SecurityHeaders>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    policy.apply(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_headers_applied() {
        let mut headers = HeaderMap::new();
        SecurityHeaders::for_environment(Environment::Development).apply(&mut headers);

        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
        assert_eq!(
            headers.get(header::CONTENT_SECURITY_POLICY).unwrap(),
            "default-src 'none'; frame-ancestors 'none'"
        );
        assert!(headers.get("permissions-policy").is_some());
        assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
    }

    #[test]
    fn test_hsts_only_for_production() {
        for (environment, expected) in [
            (Environment::Development, false),
            (Environment::Staging, false),
            (Environment::Production, true),
        ] {
            let mut headers = HeaderMap::new();
            SecurityHeaders::for_environment(environment).apply(&mut headers);

            assert_eq!(
                headers.contains_key(header::STRICT_TRANSPORT_SECURITY),
                expected,
                "{:?}",
                environment
            );
        }
    }

    #[test]
    fn test_existing_headers_preserved() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=5"));

        SecurityHeaders::for_environment(Environment::Production).apply(&mut headers);

        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "max-age=5");
        assert_eq!(headers.get_all(header::CACHE_CONTROL).iter().count(), 1);
    }
}
