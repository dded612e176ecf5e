//! Configuration types for the One API SDK.
//!
//! # Overview
//!
//! - [`OneApiConfig`]: The configuration struct holding all SDK settings
//! - [`OneApiConfigBuilder`]: A builder for constructing [`OneApiConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`BaseUrl`]: A validated service root URL
//!
//! # Example
//!
//! ```rust
//! use one_api::{OneApiConfig, AccessToken};
//!
//! let config = OneApiConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://the-one-api.dev/v2");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, DEFAULT_BASE_URL};

use crate::error::ConfigError;

/// Configuration for the One API SDK.
///
/// `OneApiConfig` is `Clone`, `Send`, and `Sync`, so one configuration can
/// back any number of clients.
#[derive(Clone, Debug)]
pub struct OneApiConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl OneApiConfig {
    /// Creates a new builder for constructing a `OneApiConfig`.
    #[must_use]
    pub fn builder() -> OneApiConfigBuilder {
        OneApiConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the service root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify OneApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OneApiConfig>();
};

/// Builder for constructing [`OneApiConfig`] instances.
///
/// Only the access token is required. The base URL defaults to
/// [`DEFAULT_BASE_URL`].
#[derive(Debug, Default)]
pub struct OneApiConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl OneApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the service root URL.
    ///
    /// Point this at a proxy or a local mock server; all resource paths are
    /// appended to it.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OneApiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<OneApiConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(OneApiConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
