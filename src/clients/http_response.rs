//! HTTP response types for the ShipStation client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information parsed from ShipStation's rate limit headers.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Rate-Limit-*` headers.
///
/// ShipStation reports the bucket size, the remaining requests and the
/// number of seconds until the bucket resets.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shipstation_api::clients::RateLimit;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["200".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["199".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["60".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 200);
/// assert_eq!(limit.remaining, 199);
/// assert_eq!(limit.reset_seconds, Some(60));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The maximum number of requests allowed in the current window.
    pub limit: u32,
    /// The number of requests left in the current window.
    pub remaining: u32,
    /// Seconds until the window resets, when reported.
    pub reset_seconds: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit headers from lowercased response headers.
    ///
    /// Returns `None` unless both the limit and remaining headers parse.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let limit = first("x-rate-limit-limit")?.trim().parse().ok()?;
        let remaining = first("x-rate-limit-remaining")?.trim().parse().ok()?;
        let reset_seconds = first("x-rate-limit-reset").and_then(|v| v.trim().parse().ok());

        Some(Self {
            limit,
            remaining,
            reset_seconds,
        })
    }
}

/// An HTTP response from the ShipStation API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. `Null` when the body was empty.
    pub body: serde_json::Value,
    /// Rate limit information, when the headers were present.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response carried a non-null body.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_null()
    }

    /// Returns the `x-request-id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_has_body() {
        let response = HttpResponse::new(204, HashMap::new(), serde_json::Value::Null);
        assert!(!response.has_body());

        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.has_body());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_rate_limit_parsing() {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit-limit".to_string(), vec!["200".to_string()]);
        headers.insert("x-rate-limit-remaining".to_string(), vec!["12".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(
            response.rate_limit,
            Some(RateLimit {
                limit: 200,
                remaining: 12,
                reset_seconds: None,
            })
        );
    }

    #[test]
    fn test_rate_limit_requires_both_counts() {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit-limit".to_string(), vec!["200".to_string()]);
        assert!(RateLimit::from_headers(&headers).is_none());

        headers.insert("x-rate-limit-remaining".to_string(), vec!["abc".to_string()]);
        assert!(RateLimit::from_headers(&headers).is_none());
    }
}
