//! Query validation errors.
//!
//! Field/resource and field/operator legality is checked by the type system.
//! [`InvalidQueryError`] covers the value-level problems that remain: page
//! numbers, empty value lists, non-finite numbers, and malformed patterns.
//! All of them are reported before any request is sent.

use thiserror::Error;

/// A query that cannot be sent to the service.
///
/// # Example
///
/// ```rust
/// use one_api::query::InvalidQueryError;
///
/// let error = InvalidQueryError::InvalidPage { page: 0 };
/// assert!(error.to_string().contains("start at 1"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidQueryError {
    /// Page numbers are 1-based.
    #[error("Invalid page {page}: page numbers start at 1.")]
    InvalidPage {
        /// The rejected page number.
        page: u32,
    },

    /// An `in` / `not in` filter was given no values.
    #[error("Filter on '{field}' needs at least one value.")]
    EmptyValueList {
        /// The filtered field.
        field: &'static str,
    },

    /// A numeric filter was given NaN or an infinity.
    #[error("Filter on '{field}' needs a finite number.")]
    NonFiniteNumber {
        /// The filtered field.
        field: &'static str,
    },

    /// A pattern value failed to parse.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern source as given.
        pattern: String,
        /// The parser's explanation.
        reason: String,
    },
}
