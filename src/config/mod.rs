//! Configuration types for the Strata SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with a Strata instance.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StrataConfig`]: The main configuration struct holding all SDK settings
//! - [`StrataConfigBuilder`]: A builder for constructing [`StrataConfig`] instances
//! - [`BaseUrl`]: A validated API base URL newtype
//! - [`StaticToken`]: A validated access token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use strata_cms::{StrataConfig, BaseUrl, StaticToken};
//!
//! let config = StrataConfig::builder()
//!     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
//!     .access_token(StaticToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, StaticToken};

use crate::error::ConfigError;

/// Configuration for the Strata SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the API base URL, the static access token, and HTTP client settings.
///
/// # Thread Safety
///
/// `StrataConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use strata_cms::{StrataConfig, BaseUrl, StaticToken};
///
/// let config = StrataConfig::builder()
///     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
///     .access_token(StaticToken::new("my-token").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert!(config.access_token().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct StrataConfig {
    base_url: BaseUrl,
    access_token: Option<StaticToken>,
    user_agent_prefix: Option<String>,
}

impl StrataConfig {
    /// Creates a new builder for constructing a `StrataConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_cms::{StrataConfig, BaseUrl};
    ///
    /// let config = StrataConfig::builder()
    ///     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> StrataConfigBuilder {
        StrataConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the static access token, if configured.
    ///
    /// Requests are sent unauthenticated when no token is configured; the
    /// server then applies its public-role permissions.
    #[must_use]
    pub const fn access_token(&self) -> Option<&StaticToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StrataConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StrataConfig>();
};

/// Builder for constructing [`StrataConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `base_url`; all other fields have sensible defaults.
///
/// # Defaults
///
/// - `access_token`: `None` (unauthenticated, public-role access)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use strata_cms::{StrataConfig, BaseUrl, StaticToken};
///
/// let config = StrataConfig::builder()
///     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
///     .access_token(StaticToken::new("my-token").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StrataConfigBuilder {
    base_url: Option<BaseUrl>,
    access_token: Option<StaticToken>,
    user_agent_prefix: Option<String>,
}

impl StrataConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the static access token.
    #[must_use]
    pub fn access_token(mut self, token: StaticToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StrataConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<StrataConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(StrataConfig {
            base_url,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = StrataConfigBuilder::new()
            .access_token(StaticToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StrataConfig::builder()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .build()
            .unwrap();

        assert!(config.access_token().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StrataConfig::builder()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .access_token(StaticToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://cms.example.com");
        assert_eq!(config.access_token().unwrap().as_ref(), "token");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StrataConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = StrataConfig::builder()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .access_token(StaticToken::new("secret-token").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        // The token must stay masked through the config's Debug output.
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StrataConfig"));
        assert!(!debug_str.contains("secret-token"));
    }
}
