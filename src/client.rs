//! The SDK entry point.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::StrataConfig;
use crate::items::ItemsHandler;
use crate::transport::{HttpTransport, Transport};

/// Client for a Strata instance.
///
/// The client owns the shared transport and hands out typed
/// [`ItemsHandler`]s for individual collections. It is generic over the
/// transport so tests and alternative HTTP stacks can inject their own
/// [`Transport`] implementation; the default is [`HttpTransport`].
///
/// # Thread Safety
///
/// `StrataClient` is `Clone`, `Send`, and `Sync`; clones share the
/// underlying transport.
///
/// # Example
///
/// ```rust
/// use strata_cms::{BaseUrl, StaticToken, StrataClient, StrataConfig};
///
/// let config = StrataConfig::builder()
///     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
///     .access_token(StaticToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = StrataClient::new(&config);
/// let articles = client.items::<serde_json::Value>("articles");
/// ```
#[derive(Debug)]
pub struct StrataClient<C = HttpTransport> {
    transport: Arc<C>,
}

impl<C> Clone for StrataClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl StrataClient<HttpTransport> {
    /// Creates a client using the default HTTP transport.
    #[must_use]
    pub fn new(config: &StrataConfig) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(config)),
        }
    }
}

impl<C: Transport> StrataClient<C> {
    /// Creates a client over a custom transport.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let client = StrataClient::with_transport(MyTransport::new());
    /// ```
    #[must_use]
    pub fn with_transport(transport: C) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Returns a typed handler for a collection.
    ///
    /// The item type `T` is any serde-deserializable struct matching the
    /// collection's fields; use `serde_json::Value` for schemaless access.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let articles = client.items::<Article>("articles");
    /// let users = client.items::<User>("strata_users"); // system collection
    /// ```
    #[must_use]
    pub fn items<T: DeserializeOwned>(&self, collection: impl Into<String>) -> ItemsHandler<T, C> {
        ItemsHandler::new(collection, Arc::clone(&self.transport))
    }

    /// Returns the transport this client delegates to.
    #[must_use]
    pub fn transport(&self) -> &C {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn test_config() -> StrataConfig {
        StrataConfig::builder()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_hands_out_handlers() {
        let client = StrataClient::new(&test_config());
        let handler = client.items::<serde_json::Value>("articles");

        assert_eq!(handler.collection(), "articles");
        assert_eq!(handler.endpoint(), "/items/articles");
    }

    #[test]
    fn test_clones_share_the_transport() {
        let client = StrataClient::new(&test_config());
        let clone = client.clone();

        assert!(std::ptr::eq(client.transport(), clone.transport()));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StrataClient>();
    }
}
