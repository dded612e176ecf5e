//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The service root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2";

/// A validated One API access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use one_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated service root URL, e.g. `https://the-one-api.dev/v2`.
///
/// The URL must carry an `http` or `https` scheme and a non-empty host.
/// Trailing slashes are removed so resource paths can be appended with a
/// single `/`.
///
/// # Example
///
/// ```rust
/// use one_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/v2/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/v2");
/// assert_eq!(url.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no supported
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let remainder = &url[scheme_end + 3..];
        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if host_end == 0 {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Query strings and fragments would corrupt appended resource paths.
        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Joins a resource path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: "https".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AccessToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_trims_trailing_slashes() {
        let url = BaseUrl::new("https://the-one-api.dev/v2//").unwrap();
        assert_eq!(url.as_ref(), "https://the-one-api.dev/v2");
    }

    #[test]
    fn test_base_url_join_uses_single_separator() {
        let url = BaseUrl::new("http://127.0.0.1:4000").unwrap();
        assert_eq!(url.join("character"), "http://127.0.0.1:4000/character");
        assert_eq!(url.join("/book/1/chapter"), "http://127.0.0.1:4000/book/1/chapter");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        for bad in [
            "the-one-api.dev",
            "ftp://the-one-api.dev",
            "https://",
            "https:///v2",
            "https://the-one-api.dev/v2?x=1",
        ] {
            assert!(
                matches!(BaseUrl::new(bad), Err(ConfigError::InvalidBaseUrl { .. })),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn test_default_base_url_points_at_service() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), DEFAULT_BASE_URL);
        assert_eq!(url.scheme(), "https");
        assert_eq!(url, BaseUrl::new(DEFAULT_BASE_URL).unwrap());
    }
}
