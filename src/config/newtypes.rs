//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated base URL for the Strata API.
///
/// This newtype ensures the URL is an absolute http(s) URL and normalizes
/// away any trailing slash so endpoint paths can be appended directly.
///
/// # Accepted Formats
///
/// - `https://cms.example.com` - used as-is
/// - `https://cms.example.com/` - trailing slash removed
/// - `http://localhost:8055` - plain http is accepted for local development
///
/// # Example
///
/// ```rust
/// use strata_cms::BaseUrl;
///
/// let url = BaseUrl::new("https://cms.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://cms.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty, has no
    /// http(s) scheme, or has no host portion.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        let valid = match rest {
            // The host portion must be non-empty and free of whitespace.
            Some(rest) => {
                let host = rest.split('/').next().unwrap_or("");
                !host.is_empty() && !rest.contains(char::is_whitespace)
            }
            None => false,
        };

        if !valid {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated static access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `StaticToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use strata_cms::StaticToken;
///
/// let token = StaticToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "StaticToken(*****)");
/// assert_eq!(token.as_ref(), "my-token");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticToken(String);

impl StaticToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for StaticToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === BaseUrl Tests ===

    #[test]
    fn test_base_url_accepts_https() {
        let url = BaseUrl::new("https://cms.example.com").unwrap();
        assert_eq!(url.as_ref(), "https://cms.example.com");
    }

    #[test]
    fn test_base_url_accepts_http_for_local_development() {
        let url = BaseUrl::new("http://localhost:8055").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8055");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://cms.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://cms.example.com");
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = BaseUrl::new("https://example.com/cms/").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/cms");
    }

    #[test]
    fn test_base_url_trims_surrounding_whitespace() {
        let url = BaseUrl::new("  https://cms.example.com  ").unwrap();
        assert_eq!(url.as_ref(), "https://cms.example.com");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        let result = BaseUrl::new("cms.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_empty() {
        let result = BaseUrl::new("");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_scheme_only() {
        let result = BaseUrl::new("https://");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_embedded_whitespace() {
        let result = BaseUrl::new("https://cms.exa mple.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_display_matches_as_ref() {
        let url = BaseUrl::new("https://cms.example.com").unwrap();
        assert_eq!(url.to_string(), url.as_ref());
    }

    // === StaticToken Tests ===

    #[test]
    fn test_static_token_accepts_non_empty() {
        let token = StaticToken::new("abc123").unwrap();
        assert_eq!(token.as_ref(), "abc123");
    }

    #[test]
    fn test_static_token_rejects_empty() {
        let result = StaticToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_static_token_debug_is_masked() {
        let token = StaticToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "StaticToken(*****)");
        assert!(!debug.contains("super-secret"));
    }
}
