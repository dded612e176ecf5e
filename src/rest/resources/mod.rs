//! One API resource types.
//!
//! Each entity is a plain serde struct implementing [`Resource`] plus a set
//! of [`Field`] constants naming its queryable fields:
//!
//! | Resource | Path | Fields |
//! |----------|------|--------|
//! | [`Book`] | `book` | `_id`, `name` |
//! | [`Movie`] | `movie` | `_id`, `name`, runtime, budget, revenue, awards, score |
//! | [`Character`] | `character` | `_id`, `name`, `race`, `gender`, `birth`, `death`, `realm`, `hair`, `height`, `spouse`, `wikiUrl` |
//! | [`Quote`] | `quote` | `_id`, `dialog`, `movie`, `character` |
//! | [`Chapter`] | `chapter` | `_id`, `chapterName`, `book` |
//! | [`BookChapter`] | `book/{id}/chapter` | `_id`, `chapterName` |
//!
//! # Example
//!
//! ```rust
//! use one_api::query::{op, Query};
//! use one_api::rest::resources::Quote;
//!
//! let query = Query::<Quote>::new()
//!     .with(Quote::CHARACTER, op::eq("5cd99d4bde30eff6ebccfea0"))
//!     .limit(3);
//!
//! assert_eq!(query.compile().unwrap().get("character"), Some("5cd99d4bde30eff6ebccfea0"));
//! ```
//!
//! [`Resource`]: crate::rest::Resource
//! [`Field`]: crate::query::Field

mod book;
mod chapter;
mod character;
mod movie;
mod quote;

pub use book::Book;
pub use chapter::{BookChapter, Chapter};
pub use character::Character;
pub use movie::Movie;
pub use quote::Quote;
