//! Query compiler for the One API filter grammar.
//!
//! This module turns typed builder calls into the query parameters the
//! service understands. It has no network dependencies.
//!
//! # Overview
//!
//! - [`Query`]: Builder accumulating paging, sorting, and filters for one resource
//! - [`Field`]: A typed field constant, tagged with a [`FieldKind`] ([`Text`], [`Number`], [`Id`])
//! - [`op`]: Condition constructors (`eq`, `ne`, `gt`, `lt`, `ge`, `le`, `is_in`, `not_in`)
//! - [`Pattern`]: Regular-expression value for text filters
//! - [`QueryParams`]: The compiled, ordered parameter set
//! - [`InvalidQueryError`]: Value-level problems detected before sending
//!
//! # Example
//!
//! ```rust
//! use one_api::query::{op, Pattern, Query};
//! use one_api::rest::resources::Character;
//!
//! let query = Query::<Character>::new()
//!     .with(Character::NAME, op::eq(Pattern::new("^Gand").unwrap()))
//!     .limit(10);
//!
//! assert_eq!(query.compile().unwrap().to_string(), "name=%2F%5EGand%2F&limit=10");
//! ```

mod builder;
mod condition;
mod errors;
mod field;
mod params;

pub use builder::Query;
pub use condition::{
    op, AtLeast, AtMost, Condition, Equals, GreaterThan, LessThan, ListValue, NoneOf, NotEquals,
    OneOf, Pattern, ScalarValue, TextValue,
};
pub use errors::InvalidQueryError;
pub use field::{Field, FieldKind, Id, Number, SortDirection, Text};
pub use params::QueryParams;
