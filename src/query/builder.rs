//! The query compiler.
//!
//! [`Query<R>`] accumulates paging, sorting, and filter directives against
//! resource `R` and compiles them into [`QueryParams`]. It performs no I/O.

use std::fmt;
use std::marker::PhantomData;

use crate::query::condition::Condition;
use crate::query::errors::InvalidQueryError;
use crate::query::field::{Field, FieldKind, SortDirection};
use crate::query::params::QueryParams;

/// A typed query against resource `R`.
///
/// Builder methods consume and return the query, so a query is built in one
/// chained expression and owned by whoever holds the result.
///
/// # Singletons
///
/// `limit`, `page`, `offset`, and `sort` each map to one parameter. Calling
/// one of them again replaces the earlier value; the parameter is never
/// duplicated.
///
/// # Filters
///
/// Filters may be applied to any number of fields. A second filter that
/// encodes to the same key as an earlier one (same field, same operator
/// class) replaces it.
///
/// # Deferred validation
///
/// Value-level problems (page 0, an empty `in` list, a NaN bound) cannot be
/// ruled out by types. The first such problem is recorded and returned by
/// [`compile`](Self::compile), before anything is sent.
///
/// # Example
///
/// ```rust
/// use one_api::query::{op, Query, SortDirection};
/// use one_api::rest::resources::Character;
///
/// let query = Query::<Character>::new()
///     .with(Character::RACE, op::is_in(["Hobbit", "Human"]))
///     .with_exists(Character::REALM)
///     .sort(Character::NAME, SortDirection::Desc)
///     .limit(5);
///
/// let params = query.compile().unwrap();
/// assert_eq!(params.get("race"), Some("Hobbit,Human"));
/// assert_eq!(params.get("realm"), Some(""));
/// assert_eq!(params.get("sort"), Some("name:desc"));
/// assert_eq!(params.get("limit"), Some("5"));
/// ```
pub struct Query<R> {
    params: QueryParams,
    error: Option<InvalidQueryError>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Query<R> {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: QueryParams::new(),
            error: None,
            _resource: PhantomData,
        }
    }

    /// Limits the number of items returned per page.
    #[must_use]
    pub fn limit(mut self, n: u32) -> Self {
        self.params.set("limit", n.to_string());
        self
    }

    /// Selects which page to return, starting from 1.
    #[must_use]
    pub fn page(mut self, n: u32) -> Self {
        if n == 0 {
            self.reject(InvalidQueryError::InvalidPage { page: n });
        }
        self.params.set("page", n.to_string());
        self
    }

    /// Skips the first `n` items.
    #[must_use]
    pub fn offset(mut self, n: u32) -> Self {
        self.params.set("offset", n.to_string());
        self
    }

    /// Sorts the returned items by `field`.
    #[must_use]
    pub fn sort<K: FieldKind>(mut self, field: Field<R, K>, direction: SortDirection) -> Self {
        self.params
            .set("sort", format!("{}:{direction}", field.name()));
        self
    }

    /// Filters on `field` with `condition`.
    ///
    /// Which conditions a field accepts depends on its kind; see
    /// [`op`](crate::query::op).
    #[must_use]
    pub fn with<K: FieldKind, C: Condition<K>>(mut self, field: Field<R, K>, condition: C) -> Self {
        match condition.encode(field.name()) {
            Ok((key, value)) => self.params.set(key, value),
            Err(e) => self.reject(e),
        }
        self
    }

    /// Keeps only items where `field` is present.
    #[must_use]
    pub fn with_exists<K: FieldKind>(mut self, field: Field<R, K>) -> Self {
        self.params.set(field.name(), "");
        self
    }

    /// Keeps only items where `field` is absent.
    #[must_use]
    pub fn with_not_exists<K: FieldKind>(mut self, field: Field<R, K>) -> Self {
        self.params.set(format!("!{}", field.name()), "");
        self
    }

    /// Returns the parameters accumulated so far, valid or not.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the page number set with [`page`](Self::page), if any.
    #[must_use]
    pub fn page_number(&self) -> Option<u32> {
        self.params.get("page").and_then(|n| n.parse().ok())
    }

    /// Returns the compiled parameters.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidQueryError`] recorded while building.
    pub fn compile(&self) -> Result<&QueryParams, InvalidQueryError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(&self.params),
        }
    }

    /// Derives a new query with the same directives and `page` set to `n`.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn at_page(&self, n: u32) -> Self {
        self.clone().page(n)
    }

    fn reject(&mut self, error: InvalidQueryError) {
        if self.error.is_none() {
            tracing::debug!("Rejecting query: {}", error);
            self.error = Some(error);
        }
    }
}

impl<R> Default for Query<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Query<R> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            error: self.error.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> PartialEq for Query<R> {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.error == other.error
    }
}

impl<R> fmt::Debug for Query<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("params", &self.params.to_string())
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::field::{Number, Text};
    use crate::query::op;

    enum Movie {}

    const NAME: Field<Movie, Text> = Field::new("name");
    const RUNTIME: Field<Movie, Number> = Field::new("runtimeInMinutes");

    #[test]
    fn test_empty_query_compiles_to_no_params() {
        let query = Query::<Movie>::new();
        assert!(query.compile().unwrap().is_empty());
    }

    #[test]
    fn test_singletons_last_write_wins() {
        let query = Query::<Movie>::new()
            .limit(5)
            .page(2)
            .offset(10)
            .sort(NAME, SortDirection::Asc)
            .limit(20)
            .page(3)
            .offset(0)
            .sort(RUNTIME, SortDirection::Desc);

        let params = query.compile().unwrap();
        assert_eq!(params.len(), 4);
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("offset"), Some("0"));
        assert_eq!(params.get("sort"), Some("runtimeInMinutes:desc"));
    }

    #[test]
    fn test_same_filter_key_overwrites() {
        let query = Query::<Movie>::new()
            .with(NAME, op::eq("The Two Towers"))
            .with(NAME, op::eq("The Return of the King"));

        let params = query.compile().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name"), Some("The Return of the King"));
    }

    #[test]
    fn test_different_operator_classes_coexist() {
        let query = Query::<Movie>::new()
            .with(RUNTIME, op::ge(100))
            .with(RUNTIME, op::le(200))
            .with(NAME, op::ne("The Hobbit Series"));

        let params = query.compile().unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("runtimeInMinutes>"), Some("100"));
        assert_eq!(params.get("runtimeInMinutes<"), Some("200"));
        assert_eq!(params.get("name!"), Some("The Hobbit Series"));
    }

    #[test]
    fn test_exists_and_not_exists() {
        let query = Query::<Movie>::new()
            .with_exists(NAME)
            .with_not_exists(RUNTIME);

        let params = query.compile().unwrap();
        assert_eq!(params.get("name"), Some(""));
        assert_eq!(params.get("!runtimeInMinutes"), Some(""));
    }

    #[test]
    fn test_page_zero_is_rejected_at_compile() {
        let query = Query::<Movie>::new().page(0).limit(5);
        assert_eq!(
            query.compile(),
            Err(InvalidQueryError::InvalidPage { page: 0 })
        );
    }

    #[test]
    fn test_first_error_is_kept() {
        let query = Query::<Movie>::new()
            .with(RUNTIME, op::gt(f64::INFINITY))
            .page(0);
        assert_eq!(
            query.compile(),
            Err(InvalidQueryError::NonFiniteNumber {
                field: "runtimeInMinutes"
            })
        );
    }

    #[test]
    fn test_at_page_leaves_original_untouched() {
        let original = Query::<Movie>::new().with(NAME, op::eq("x")).page(1);
        let next = original.at_page(2);

        assert_eq!(original.params().get("page"), Some("1"));
        assert_eq!(next.params().get("page"), Some("2"));
        assert_eq!(next.params().get("name"), Some("x"));
    }

    #[test]
    fn test_page_number_reads_back_the_set_page() {
        assert_eq!(Query::<Movie>::new().page_number(), None);
        assert_eq!(Query::<Movie>::new().page(4).page_number(), Some(4));
        assert_eq!(Query::<Movie>::new().page(4).page(7).page_number(), Some(7));
    }
}
