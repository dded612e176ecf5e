//! # One API Rust SDK
//!
//! A Rust client for [The One API](https://the-one-api.dev), the catalog of
//! books, movies, characters, quotes, and chapters of The Lord of the Rings.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`OneApiConfig`] and [`OneApiConfigBuilder`]
//! - A typed query builder whose filters are checked against each resource's
//!   fields at compile time ([`query`])
//! - A request executor with single-page [`get`](rest::ListRequest::get) and
//!   drain-all-pages [`get_all`](rest::ListRequest::get_all)
//! - A pluggable [`Transport`], with a reqwest-backed [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use one_api::{AccessToken, OneApiConfig};
//!
//! let config = OneApiConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://the-one-api.dev/v2");
//! ```
//!
//! ## Querying
//!
//! Filters are built from field constants and condition constructors. Each
//! field only accepts conditions valid for its kind, so ordering a text field
//! or passing a string where a number is expected does not compile.
//!
//! ```rust,ignore
//! use one_api::{AccessToken, OneApi, OneApiConfig};
//! use one_api::query::{op, Pattern, SortDirection};
//! use one_api::rest::resources::{Character, Movie};
//!
//! let api = OneApi::new(&config)?;
//!
//! // Every movie longer than two and a half hours, longest first
//! let movies = api
//!     .movies()
//!     .with(Movie::RUNTIME_IN_MINUTES, op::gt(150))
//!     .sort(Movie::RUNTIME_IN_MINUTES, SortDirection::Desc)
//!     .get_all()
//!     .await?;
//!
//! // Hobbits and humans whose name starts with "B", case-insensitively
//! let characters = api
//!     .characters()
//!     .with(Character::RACE, op::is_in(["Hobbit", "Human"]))
//!     .with(Character::NAME, op::eq(Pattern::new("^b")?.case_insensitive()))
//!     .limit(50)
//!     .get()
//!     .await?;
//!
//! // Gandalf's quotes
//! let quotes = api
//!     .character("5cd99d4bde30eff6ebccfea0")
//!     .quotes()
//!     .get_all()
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! Terminal request methods return [`ApiError`]. Invalid queries (page 0, an
//! empty `in` list, a NaN bound) are rejected before anything is sent.
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events: `debug` for every request and every page
//! of a drain, `warn` when the service reports an exhausted rate limit.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure surfaces to the caller unchanged

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// Re-export public types at crate root for convenience
pub use api::OneApi;
pub use config::{AccessToken, BaseUrl, OneApiConfig, OneApiConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError, RateLimit, Transport};

// Re-export request types
pub use query::{op, InvalidQueryError, Pattern, Query, SortDirection};
pub use rest::{ApiError, ListRequest, Page, Resource, SingleRequest};
