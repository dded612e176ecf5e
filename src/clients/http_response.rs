//! HTTP response types for the One API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by every
//! [`Transport`](crate::clients::Transport), and [`RateLimit`], parsed from
//! the service's rate limit headers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// The service allows a fixed number of requests per window; `remaining`
/// counts down and resets at `reset`.
///
/// # Example
///
/// ```rust
/// use one_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["100".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["0".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["1700000000".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 100);
/// assert!(limit.is_exhausted());
/// assert_eq!(limit.reset.unwrap().timestamp(), 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// When the window resets, if reported.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Parses rate limit headers from lowercase-keyed response headers.
    ///
    /// Returns `None` unless both the limit and remaining headers parse.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(|value| value.trim())
        };

        let limit = first("x-ratelimit-limit")?.parse().ok()?;
        let remaining = first("x-ratelimit-remaining")?.parse().ok()?;
        let reset = first("x-ratelimit-reset")
            .and_then(|value| value.parse::<i64>().ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }

    /// Returns `true` if no requests remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// An HTTP response from the One API.
///
/// Carries the status code, headers, and JSON body. The body is `Null`
/// when a non-2xx response had no JSON body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information, when the service reported it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
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

    /// Returns the service's `message` field from the body, if present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(serde_json::Value::as_str)
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
