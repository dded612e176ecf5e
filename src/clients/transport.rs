//! The transport seam between the request executor and HTTP.

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::query::QueryParams;

/// Issues `GET` requests against the service.
///
/// This is the only capability the request executor needs. [`HttpClient`]
/// is the production implementation; tests substitute in-memory transports
/// that replay canned pages.
///
/// Implementations return non-2xx responses with a JSON body as
/// `Ok(HttpResponse)`, so the executor can read the service's error message.
/// `Err` is reserved for network failures and bodies that cannot be decoded.
///
/// Transports are shared read-only by every request built from them, so
/// they must not hold per-request state.
///
/// [`HttpClient`]: crate::clients::HttpClient
///
/// # Example
///
/// ```rust
/// use one_api::clients::{HttpError, HttpResponse, Transport};
/// use one_api::query::QueryParams;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// struct Empty;
///
/// impl Transport for Empty {
///     async fn get(&self, _path: &str, _query: &QueryParams) -> Result<HttpResponse, HttpError> {
///         let body = json!({"docs": [], "total": 0, "limit": 1000, "offset": 0, "page": 1, "pages": 0});
///         Ok(HttpResponse::new(200, HashMap::new(), body))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends `GET <base>/<path>?<query>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures and undecodable bodies.
    async fn get(&self, path: &str, query: &QueryParams) -> Result<HttpResponse, HttpError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<HttpResponse, HttpError> {
        (**self).get(path, query).await
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<HttpResponse, HttpError> {
        (**self).get(path, query).await
    }
}
