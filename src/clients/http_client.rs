//! HTTP client for One API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used in production.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{BaseUrl, OneApiConfig};
use crate::query::QueryParams;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the One API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the bearer token
/// - Query string encoding
/// - JSON body decoding and rate limit header parsing
///
/// It never retries; every failure is returned to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use one_api::{AccessToken, HttpClient, OneApiConfig};
/// use one_api::clients::Transport;
/// use one_api::query::QueryParams;
///
/// let config = OneApiConfig::builder()
///     .access_token(AccessToken::new("your-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let response = client.get("book", &QueryParams::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Service root, e.g. `https://the-one-api.dev/v2`.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &OneApiConfig) -> Result<Self, HttpError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}One API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Decodes a response body.
    ///
    /// A 2xx body must be JSON. Error bodies are often HTML from a proxy, so
    /// an undecodable error body becomes `Null` and the status carries the fault.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, HttpError> {
        let ok = (200..=299).contains(&code);
        if body_text.trim().is_empty() && !ok {
            return Ok(serde_json::Value::Null);
        }
        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(_) if !ok => Ok(serde_json::Value::Null),
            Err(source) => Err(HttpError::InvalidBody { code, source }),
        }
    }
}

impl Transport for HttpClient {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<HttpResponse, HttpError> {
        let url = self.base_url.join(path);
        tracing::debug!("GET {}?{}", url, query);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if !query.is_empty() {
            req_builder = req_builder.query(query.as_slice());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let reason = res.status().canonical_reason().unwrap_or_default();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(code, &body_text)?;

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(limit) = response.rate_limit.filter(|l| l.is_exhausted()) {
            tracing::warn!(
                "One API rate limit of {} requests exhausted after request to {}; resets at {:?}",
                limit.limit,
                path,
                limit.reset
            );
        }

        // Non-JSON error bodies keep their text so the caller still sees something.
        if !response.is_ok() && response.body.is_null() {
            let message = if body_text.trim().is_empty() {
                reason.to_string()
            } else {
                body_text
            };
            tracing::debug!("GET {} failed with status {}: {}", path, code, message);
            return Err(HttpError::Response(HttpResponseError { code, message }));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn create_test_config() -> OneApiConfig {
        OneApiConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_configured_base_url() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url().as_ref(), "https://the-one-api.dev/v2");
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("One API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = OneApiConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("Bag End/0.1")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Bag End/0.1 | "));
        assert!(user_agent.contains("One API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_parse_body_rejects_malformed_success_body() {
        let result = HttpClient::parse_body(200, "<html>oops</html>");
        assert!(matches!(result, Err(HttpError::InvalidBody { code: 200, .. })));
    }

    #[test]
    fn test_parse_body_tolerates_non_json_error_body() {
        let body = HttpClient::parse_body(502, "<html>Bad Gateway</html>").unwrap();
        assert!(body.is_null());

        let body = HttpClient::parse_body(500, "").unwrap();
        assert!(body.is_null());
    }

    #[test]
    fn test_parse_body_keeps_json_error_body() {
        let body = HttpClient::parse_body(401, r#"{"success":false,"message":"Unauthorized."}"#)
            .unwrap();
        assert_eq!(body["message"], "Unauthorized.");
    }
}
