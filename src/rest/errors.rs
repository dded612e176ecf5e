//! Error types for request execution.
//!
//! [`ApiError`] is the single error type returned by every terminal request
//! operation. It classifies failures as:
//!
//! - **[`ApiError::InvalidQuery`]**: The query was rejected before sending
//! - **[`ApiError::Remote`]**: The service answered with a failure message
//! - **[`ApiError::NotFound`]**: A single-item request matched nothing
//! - **[`ApiError::Transport`]**: Network fault, undecodable body, or an HTTP
//!   error without a service message
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::rest::ApiError;
//!
//! match api.character("5cd99d4bde30eff6ebccfbbe").get().await {
//!     Ok(character) => println!("Found: {}", character.name),
//!     Err(ApiError::NotFound { resource, path }) => println!("No {resource} at {path}"),
//!     Err(ApiError::Remote { status, message }) => println!("{status}: {message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::query::InvalidQueryError;

/// Error type for request execution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The query failed validation; nothing was sent.
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQueryError),

    /// The service reported a failure.
    ///
    /// Returned for a `{"success": false, "message": ...}` envelope and for
    /// non-2xx responses whose body carries a `message`.
    #[error("Request failed: {message}")]
    Remote {
        /// The HTTP status code of the response.
        status: u16,
        /// The service's message, verbatim.
        message: String,
    },

    /// A single-item request returned no documents.
    #[error("No {resource} found at '{path}'")]
    NotFound {
        /// The resource type name (e.g., "Character").
        resource: &'static str,
        /// The requested resource path.
        path: String,
    },

    /// A transport fault, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl ApiError {
    /// Returns the HTTP status code, when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(HttpError::Response(e)) => Some(e.code),
            Self::Transport(HttpError::InvalidBody { code, .. }) => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` for [`ApiError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_remote_error_carries_message_verbatim() {
        let error = ApiError::Remote {
            status: 401,
            message: "Unauthorized.".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed: Unauthorized.");
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_not_found_error_names_resource_and_path() {
        let error = ApiError::NotFound {
            resource: "Book",
            path: "book/123".to_string(),
        };
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "No Book found at 'book/123'");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_query_is_transparent() {
        let error: ApiError = InvalidQueryError::InvalidPage { page: 0 }.into();
        assert_eq!(
            error.to_string(),
            InvalidQueryError::InvalidPage { page: 0 }.to_string()
        );
    }

    #[test]
    fn test_transport_fault_passes_through() {
        let error: ApiError = HttpError::Response(HttpResponseError {
            code: 502,
            message: "Bad Gateway".to_string(),
        })
        .into();

        assert!(matches!(error, ApiError::Transport(HttpError::Response(_))));
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(error.status(), Some(502));
    }
}
