//! HTTP-specific error types for the One API SDK.
//!
//! These are the transport faults: failures that cannot be expressed as a
//! service failure envelope.
//!
//! - [`HttpResponseError`]: Non-2xx response whose body carries no service message
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::clients::{HttpError, Transport};
//!
//! match client.get("character", &params).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidBody { code, source }) => println!("Bad body ({code}): {source}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// A non-successful HTTP response that carried no service error message.
///
/// # Example
///
/// ```rust
/// use one_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body, or the status reason when the body was empty.
    pub message: String,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without a service message.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A response body that is not the JSON the service promises.
    #[error("Response body (status {code}) could not be decoded: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_invalid_body_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::InvalidBody { code: 200, source };

        assert!(error.to_string().contains("status 200"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_from_response_error_conversion() {
        let error: HttpError = HttpResponseError {
            code: 503,
            message: String::new(),
        }
        .into();

        assert!(matches!(error, HttpError::Response(HttpResponseError { code: 503, .. })));
    }
}
