//! Request executor.
//!
//! A request pairs a resource path with a [`Query`] and a borrowed
//! [`Transport`]. Two shapes exist:
//!
//! - [`ListRequest`]: a collection endpoint; supports the query builder,
//!   [`get`](ListRequest::get) for one page and
//!   [`get_all`](ListRequest::get_all) to drain every page
//! - [`SingleRequest`]: a resource by id; [`get`](SingleRequest::get)
//!   returns the document or [`ApiError::NotFound`]
//!
//! Requests are normally built through [`OneApi`](crate::OneApi):
//!
//! ```rust,ignore
//! use one_api::query::{op, SortDirection};
//! use one_api::rest::resources::Movie;
//!
//! let long_movies = api
//!     .movies()
//!     .with(Movie::RUNTIME_IN_MINUTES, op::gt(160))
//!     .sort(Movie::NAME, SortDirection::Asc)
//!     .get_all()
//!     .await?;
//! ```
//!
//! Dropping a pending future cancels the request; a drain stops issuing
//! page requests as soon as it is dropped.

use std::fmt;
use std::marker::PhantomData;

use crate::clients::Transport;
use crate::query::{Condition, Field, FieldKind, Query, QueryParams, SortDirection};
use crate::rest::resources::{Book, BookChapter, Character, Movie, Quote};
use crate::rest::{ApiError, Page, Resource};

/// Compiles `query`, sends it to `path`, and decodes the page.
async fn fetch_page<R, T>(transport: &T, path: &str, query: &Query<R>) -> Result<Page<R>, ApiError>
where
    R: Resource,
    T: Transport,
{
    let params = query.compile()?;
    let response = transport.get(path, params).await?;
    Page::from_http_response(response)
}

/// A request against a collection endpoint.
///
/// Builder methods mirror [`Query`] and consume the request. Terminal
/// methods compile the query first; an invalid query fails with
/// [`ApiError::InvalidQuery`] and nothing is sent.
pub struct ListRequest<'c, R, T> {
    transport: &'c T,
    path: String,
    query: Query<R>,
}

impl<'c, R: Resource, T: Transport> ListRequest<'c, R, T> {
    /// Creates a request for `path` with an empty query.
    pub fn new(transport: &'c T, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
            query: Query::new(),
        }
    }

    /// Replaces the query wholesale.
    #[must_use]
    pub fn query_with(mut self, query: Query<R>) -> Self {
        self.query = query;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn limit(mut self, n: u32) -> Self {
        self.query = self.query.limit(n);
        self
    }

    /// Sets the 1-based page number.
    #[must_use]
    pub fn page(mut self, n: u32) -> Self {
        self.query = self.query.page(n);
        self
    }

    /// Sets the number of documents to skip.
    #[must_use]
    pub fn offset(mut self, n: u32) -> Self {
        self.query = self.query.offset(n);
        self
    }

    /// Sorts by `field`.
    #[must_use]
    pub fn sort<K: FieldKind>(mut self, field: Field<R, K>, direction: SortDirection) -> Self {
        self.query = self.query.sort(field, direction);
        self
    }

    /// Filters `field` by `condition`.
    #[must_use]
    pub fn with<K: FieldKind, C: Condition<K>>(mut self, field: Field<R, K>, condition: C) -> Self {
        self.query = self.query.with(field, condition);
        self
    }

    /// Keeps documents where `field` is present.
    #[must_use]
    pub fn with_exists<K: FieldKind>(mut self, field: Field<R, K>) -> Self {
        self.query = self.query.with_exists(field);
        self
    }

    /// Keeps documents where `field` is absent.
    #[must_use]
    pub fn with_not_exists<K: FieldKind>(mut self, field: Field<R, K>) -> Self {
        self.query = self.query.with_not_exists(field);
        self
    }

    /// Returns the resource path, relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query built so far.
    #[must_use]
    pub const fn query(&self) -> &Query<R> {
        &self.query
    }

    /// Compiles the query into parameters without sending anything.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidQuery`] if the query is invalid.
    pub fn params(&self) -> Result<&QueryParams, ApiError> {
        Ok(self.query.compile()?)
    }

    /// Fetches one page, keeping its pagination metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the query is invalid, the transport fails,
    /// or the service reports a failure.
    pub async fn fetch(&self) -> Result<Page<R>, ApiError> {
        fetch_page(self.transport, &self.path, &self.query).await
    }

    /// Fetches one page and returns its documents.
    ///
    /// # Errors
    ///
    /// See [`fetch`](Self::fetch).
    pub async fn get(self) -> Result<Vec<R>, ApiError> {
        Ok(self.fetch().await?.into_docs())
    }

    /// Fetches every page and returns all documents in page order.
    ///
    /// Pages are requested one at a time, starting from the query's page
    /// (page 1 if none was set). Each request uses a copy of the query with
    /// only the page number changed. Page numbers advance from the ones
    /// requested, not the ones reported, and the page count of the first
    /// response bounds the drain: it issues at most that many requests.
    /// The drain also ends early on the last page or an empty page. The
    /// first failure aborts the drain and the documents collected so far
    /// are discarded.
    ///
    /// # Errors
    ///
    /// See [`fetch`](Self::fetch).
    pub async fn get_all(self) -> Result<Vec<R>, ApiError> {
        let mut requested = self.query.page_number().unwrap_or(1);
        let mut page =
            fetch_page(self.transport, &self.path, &self.query.at_page(requested)).await?;
        let last_page = page.pages;
        let mut docs = Vec::new();

        loop {
            if page.page != 0 && page.page != requested {
                tracing::warn!(
                    "Requested page {} from {} but the service reported page {}",
                    requested,
                    self.path,
                    page.page
                );
            }
            tracing::debug!(
                "Fetched page {} of {} from {} ({} documents)",
                requested,
                last_page,
                self.path,
                page.docs.len()
            );
            let done = page.is_last() || requested >= last_page;
            docs.append(&mut page.docs);
            if done {
                break;
            }

            requested += 1;
            page =
                fetch_page(self.transport, &self.path, &self.query.at_page(requested)).await?;
        }

        Ok(docs)
    }
}

impl<R, T> Clone for ListRequest<'_, R, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport,
            path: self.path.clone(),
            query: self.query.clone(),
        }
    }
}

impl<R, T> fmt::Debug for ListRequest<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRequest")
            .field("path", &self.path)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

/// A request for one resource by id.
pub struct SingleRequest<'c, R, T> {
    transport: &'c T,
    path: String,
    _resource: PhantomData<fn() -> R>,
}

impl<'c, R: Resource, T: Transport> SingleRequest<'c, R, T> {
    /// Creates a request for `path`.
    pub fn new(transport: &'c T, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
            _resource: PhantomData,
        }
    }

    /// Returns the resource path, relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fetches the raw page the service returned for this id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the transport fails or the service reports a
    /// failure.
    pub async fn fetch(&self) -> Result<Page<R>, ApiError> {
        fetch_page(self.transport, &self.path, &Query::new()).await
    }

    /// Fetches the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the service returned no documents,
    /// otherwise see [`fetch`](Self::fetch).
    pub async fn get(self) -> Result<R, ApiError> {
        let page = self.fetch().await?;
        page.into_docs()
            .into_iter()
            .next()
            .ok_or(ApiError::NotFound {
                resource: R::KIND,
                path: self.path,
            })
    }

    fn nested<N: Resource>(&self, segment: &str) -> ListRequest<'c, N, T> {
        ListRequest::new(self.transport, format!("{}/{segment}", self.path))
    }
}

impl<'c, T: Transport> SingleRequest<'c, Book, T> {
    /// Lists the chapters of this book.
    #[must_use]
    pub fn chapters(&self) -> ListRequest<'c, BookChapter, T> {
        self.nested("chapter")
    }
}

impl<'c, T: Transport> SingleRequest<'c, Movie, T> {
    /// Lists the quotes from this movie.
    #[must_use]
    pub fn quotes(&self) -> ListRequest<'c, Quote, T> {
        self.nested("quote")
    }
}

impl<'c, T: Transport> SingleRequest<'c, Character, T> {
    /// Lists the quotes spoken by this character.
    #[must_use]
    pub fn quotes(&self) -> ListRequest<'c, Quote, T> {
        self.nested("quote")
    }
}

impl<R, T> Clone for SingleRequest<'_, R, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport,
            path: self.path.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R, T> fmt::Debug for SingleRequest<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleRequest")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponse};
    use crate::query::op;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Replays canned bodies in order and records every request.
    struct Replay {
        bodies: Mutex<Vec<Value>>,
        sent: Mutex<Vec<(String, QueryParams)>>,
    }

    impl Replay {
        fn new(mut bodies: Vec<Value>) -> Self {
            bodies.reverse();
            Self {
                bodies: Mutex::new(bodies),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(String, QueryParams)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for Replay {
        async fn get(&self, path: &str, query: &QueryParams) -> Result<HttpResponse, HttpError> {
            self.sent
                .lock()
                .unwrap()
                .push((path.to_string(), query.clone()));
            let body = self.bodies.lock().unwrap().pop().unwrap_or(Value::Null);
            Ok(HttpResponse::new(200, HashMap::new(), body))
        }
    }

    fn book_page(names: &[&str], page: u32, pages: u32) -> Value {
        let docs: Vec<Value> = names
            .iter()
            .map(|name| json!({"_id": format!("id-{name}"), "name": name}))
            .collect();
        json!({"docs": docs, "total": 3, "limit": 1, "offset": 0, "page": page, "pages": pages})
    }

    #[tokio::test]
    async fn test_get_returns_first_page_only() {
        let transport = Replay::new(vec![book_page(&["A"], 1, 3)]);

        let books = ListRequest::<Book, _>::new(&transport, "book")
            .limit(1)
            .get()
            .await
            .unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(transport.sent()[0].1.get("limit"), Some("1"));
    }

    #[tokio::test]
    async fn test_get_all_advances_page_and_keeps_parameters() {
        let transport = Replay::new(vec![
            book_page(&["A"], 1, 3),
            book_page(&["B"], 2, 3),
            book_page(&["C"], 3, 3),
        ]);

        let books = ListRequest::<Book, _>::new(&transport, "book")
            .limit(1)
            .with(Book::NAME, op::ne("Unfinished Tales"))
            .get_all()
            .await
            .unwrap();

        let names: Vec<_> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);

        let sent = transport.sent();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].1.get("page"), Some("1"));
        assert_eq!(sent[1].1.get("page"), Some("2"));
        assert_eq!(sent[2].1.get("page"), Some("3"));
        for (path, params) in &sent {
            assert_eq!(path, "book");
            assert_eq!(params.get("limit"), Some("1"));
            assert_eq!(params.get("name!"), Some("Unfinished Tales"));
        }
    }

    #[tokio::test]
    async fn test_get_all_stops_on_empty_page() {
        let transport = Replay::new(vec![book_page(&[], 1, 5)]);

        let books = ListRequest::<Book, _>::new(&transport, "book")
            .get_all()
            .await
            .unwrap();

        assert!(books.is_empty());
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_query_sends_nothing() {
        let transport = Replay::new(vec![]);

        let result = ListRequest::<Book, _>::new(&transport, "book")
            .page(0)
            .get_all()
            .await;

        assert!(matches!(result, Err(ApiError::InvalidQuery(_))));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_single_request_not_found() {
        let transport = Replay::new(vec![book_page(&[], 1, 1)]);

        let result = SingleRequest::<Book, _>::new(&transport, "book/missing")
            .get()
            .await;

        match result {
            Err(ApiError::NotFound { resource, path }) => {
                assert_eq!(resource, "Book");
                assert_eq!(path, "book/missing");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_paths() {
        let transport = Replay::new(vec![]);

        let book = SingleRequest::<Book, _>::new(&transport, "book/b1");
        assert_eq!(book.chapters().path(), "book/b1/chapter");

        let movie = SingleRequest::<Movie, _>::new(&transport, "movie/m1");
        assert_eq!(movie.quotes().path(), "movie/m1/quote");

        let character = SingleRequest::<Character, _>::new(&transport, "character/c1");
        assert_eq!(character.quotes().path(), "character/c1/quote");
    }

    #[test]
    fn test_clone_leaves_original_untouched() {
        let transport = Replay::new(vec![]);
        let base = ListRequest::<Book, _>::new(&transport, "book").limit(5);

        let narrowed = base.clone().limit(1);

        assert_eq!(base.params().unwrap().get("limit"), Some("5"));
        assert_eq!(narrowed.params().unwrap().get("limit"), Some("1"));
    }
}
