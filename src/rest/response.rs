//! The page envelope returned by list endpoints.
//!
//! Every successful response from the One API, including responses for a
//! single resource by id, wraps its documents in the same envelope:
//!
//! ```json
//! {"docs": [...], "total": 933, "limit": 10, "offset": 0, "page": 1, "pages": 94}
//! ```
//!
//! [`Page<T>`] is that envelope. It implements `Deref<Target = [T]>` so the
//! documents can be used like a slice:
//!
//! ```rust,ignore
//! let page = api.characters().limit(10).fetch().await?;
//!
//! for character in page.iter() {
//!     println!("{}", character.name);
//! }
//! println!("page {} of {}", page.page, page.pages);
//! ```
//!
//! Failures use a different shape, `{"success": false, "message": "..."}`,
//! which [`Page::from_http_response`] turns into [`ApiError::Remote`].

use std::ops::Deref;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::clients::{HttpError, HttpResponse, HttpResponseError, RateLimit};
use crate::rest::ApiError;

/// Message used when a failure envelope carries no `message`.
const UNKNOWN_FAILURE: &str = "Unknown error";

/// One page of documents plus the pagination metadata the service reported.
///
/// Missing metadata fields decode as zero (or empty, for `offset`).
///
/// # Example
///
/// ```rust
/// use one_api::clients::HttpResponse;
/// use one_api::rest::Page;
/// use one_api::rest::resources::Book;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let body = json!({
///     "docs": [{"_id": "5cf5805fb53e011a64671582", "name": "The Fellowship Of The Ring"}],
///     "total": 3, "limit": 1, "offset": 0, "page": 1, "pages": 3
/// });
/// let page: Page<Book> = Page::from_http_response(HttpResponse::new(200, HashMap::new(), body)).unwrap();
///
/// assert_eq!(page.len(), 1);
/// assert_eq!(page[0].name, "The Fellowship Of The Ring");
/// assert_eq!(page.offset, "0");
/// assert!(!page.is_last());
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    /// The documents on this page.
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
    /// Total number of matching documents.
    #[serde(default)]
    pub total: u64,
    /// Page size the service applied.
    #[serde(default)]
    pub limit: u32,
    /// Offset the service applied, as text. The service sends either a
    /// number or a string here.
    #[serde(default, deserialize_with = "deserialize_offset")]
    pub offset: String,
    /// 1-based number of this page.
    #[serde(default)]
    pub page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Rate limit reported alongside this page.
    #[serde(skip)]
    pub rate_limit: Option<RateLimit>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decodes a page from an HTTP response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Remote`] for a failure envelope, or a non-2xx response
    ///   carrying a `message`
    /// - [`ApiError::Transport`] for a non-2xx response without a message, or
    ///   a body that does not match the envelope
    pub fn from_http_response(response: HttpResponse) -> Result<Self, ApiError> {
        if let Some(error) = failure(&response) {
            tracing::debug!("One API request failed: {}", error);
            return Err(error);
        }

        let rate_limit = response.rate_limit;
        let mut page: Self = serde_json::from_value(response.body).map_err(|source| {
            ApiError::Transport(HttpError::InvalidBody {
                code: response.code,
                source,
            })
        })?;
        page.rate_limit = rate_limit;
        Ok(page)
    }
}

impl<T> Page<T> {
    /// Returns `true` if no further pages follow this one.
    ///
    /// A page is the last one when its number reaches the page count, when
    /// it holds no documents, or when the service reported no page number.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.page == 0 || self.page >= self.pages || self.docs.is_empty()
    }

    /// Consumes the page and returns its documents.
    #[must_use]
    pub fn into_docs(self) -> Vec<T> {
        self.docs
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.docs
    }
}

/// Classifies a response as a failure, if it is one.
fn failure(response: &HttpResponse) -> Option<ApiError> {
    let message = response.message().map(ToString::to_string);

    if !response.is_ok() {
        return Some(match message {
            Some(message) => ApiError::Remote {
                status: response.code,
                message,
            },
            None => ApiError::Transport(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.body.to_string(),
            })),
        });
    }

    match response.body.get("success") {
        Some(success) if is_falsy(success) => Some(ApiError::Remote {
            status: response.code,
            message: message.unwrap_or_else(|| UNKNOWN_FAILURE.to_string()),
        }),
        _ => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn deserialize_offset<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected offset as string or number, got {other}"
        ))),
    }
}
