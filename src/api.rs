//! The One API client entry point.
//!
//! [`OneApi`] owns a [`Transport`] and hands out request builders for each
//! resource collection and each resource by id.

use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::OneApiConfig;
use crate::rest::resources::{Book, Chapter, Character, Movie, Quote};
use crate::rest::{ListRequest, SingleRequest};

/// Client for The One API.
///
/// Every accessor borrows the client, so any number of requests can be
/// built and awaited concurrently from one instance.
///
/// # Thread Safety
///
/// `OneApi<HttpClient>` is `Send + Sync`, making it safe to share across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use one_api::{AccessToken, OneApi, OneApiConfig};
/// use one_api::query::op;
/// use one_api::rest::resources::Movie;
///
/// let config = OneApiConfig::builder()
///     .access_token(AccessToken::new("your-token").unwrap())
///     .build()
///     .unwrap();
/// let api = OneApi::new(&config)?;
///
/// let winners = api
///     .movies()
///     .with(Movie::ACADEMY_AWARD_WINS, op::gt(0))
///     .get_all()
///     .await?;
///
/// let book = api.book("5cf5805fb53e011a64671582").get().await?;
/// let chapters = api.book(&book.id).chapters().get_all().await?;
/// ```
#[derive(Debug)]
pub struct OneApi<T = HttpClient> {
    transport: T,
}

// Verify OneApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OneApi>();
};

impl OneApi<HttpClient> {
    /// Creates a client backed by [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &OneApiConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(HttpClient::new(config)?))
    }
}

impl<T: Transport> OneApi<T> {
    /// Creates a client over any transport.
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists books.
    pub fn books(&self) -> ListRequest<'_, Book, T> {
        ListRequest::new(&self.transport, "book")
    }

    /// Requests one book by id.
    pub fn book(&self, id: &str) -> SingleRequest<'_, Book, T> {
        SingleRequest::new(&self.transport, item_path("book", id))
    }

    /// Lists movies.
    pub fn movies(&self) -> ListRequest<'_, Movie, T> {
        ListRequest::new(&self.transport, "movie")
    }

    /// Requests one movie by id.
    pub fn movie(&self, id: &str) -> SingleRequest<'_, Movie, T> {
        SingleRequest::new(&self.transport, item_path("movie", id))
    }

    /// Lists characters.
    pub fn characters(&self) -> ListRequest<'_, Character, T> {
        ListRequest::new(&self.transport, "character")
    }

    /// Requests one character by id.
    pub fn character(&self, id: &str) -> SingleRequest<'_, Character, T> {
        SingleRequest::new(&self.transport, item_path("character", id))
    }

    /// Lists quotes.
    pub fn quotes(&self) -> ListRequest<'_, Quote, T> {
        ListRequest::new(&self.transport, "quote")
    }

    /// Requests one quote by id.
    pub fn quote(&self, id: &str) -> SingleRequest<'_, Quote, T> {
        SingleRequest::new(&self.transport, item_path("quote", id))
    }

    /// Lists chapters across all books.
    pub fn chapters(&self) -> ListRequest<'_, Chapter, T> {
        ListRequest::new(&self.transport, "chapter")
    }

    /// Requests one chapter by id.
    pub fn chapter(&self, id: &str) -> SingleRequest<'_, Chapter, T> {
        SingleRequest::new(&self.transport, item_path("chapter", id))
    }
}

/// Builds `collection/<id>`, percent-encoding the id as one path segment.
fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", urlencoding::encode(id))
}
