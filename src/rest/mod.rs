//! Request execution for One API resources.
//!
//! This module turns a resource path plus a compiled query into typed
//! results:
//!
//! - **[`Resource`] trait**: Links an entity type to its display name
//! - **[`ListRequest`] / [`SingleRequest`]**: Request builders with `get` and `get_all`
//! - **[`Page<T>`]**: The page envelope, Deref-able to the documents
//! - **[`ApiError`]**: Semantic error types for request execution
//! - **[`resources`]**: The entity types (Book, Movie, Character, Quote, Chapter)
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::OneApi;
//! use one_api::query::{op, Pattern, SortDirection};
//! use one_api::rest::resources::Character;
//!
//! let api = OneApi::new(&config)?;
//!
//! // One page, with its pagination metadata
//! let page = api.characters().limit(20).fetch().await?;
//! println!("{} of {} characters", page.len(), page.total);
//!
//! // Every page
//! let hobbits = api
//!     .characters()
//!     .with(Character::RACE, op::eq("Hobbit"))
//!     .sort(Character::NAME, SortDirection::Asc)
//!     .get_all()
//!     .await?;
//!
//! // One resource, then its nested collection
//! let gandalf = api.character("5cd99d4bde30eff6ebccfea0");
//! let quotes = gandalf.quotes().get_all().await?;
//! let gandalf = gandalf.get().await?;
//! ```

mod errors;
mod request;
mod resource;
mod response;

pub mod resources;

pub use errors::ApiError;
pub use request::{ListRequest, SingleRequest};
pub use resource::Resource;
pub use response::Page;
