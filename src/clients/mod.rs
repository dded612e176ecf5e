//! HTTP client types for One API communication.
//!
//! This module provides the transport layer underneath the request executor.
//!
//! # Overview
//!
//! - [`Transport`]: The `GET` capability the executor depends on
//! - [`HttpClient`]: The reqwest-backed transport
//! - [`HttpResponse`]: A decoded response (status, headers, JSON body)
//! - [`RateLimit`]: Parsed `X-RateLimit-*` headers
//! - [`HttpError`] / [`HttpResponseError`]: Transport faults
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::{AccessToken, OneApiConfig};
//! use one_api::clients::{HttpClient, Transport};
//! use one_api::query::QueryParams;
//!
//! let config = OneApiConfig::builder()
//!     .access_token(AccessToken::new("your-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let response = client.get("movie", &QueryParams::new()).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. Timeouts, retries, and connection pooling are left to reqwest's
//! defaults; every failure surfaces to the caller.

mod errors;
mod http_client;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::Transport;
