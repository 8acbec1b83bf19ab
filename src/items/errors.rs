//! Semantic error types for item operations.
//!
//! This module contains error types for item operations, extending the
//! transport-level [`TransportError`](crate::TransportError) with
//! collection-aware semantics like `NotFound` and `Forbidden`.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ItemsError::NotFound`] - Item doesn't exist
//! - **403**: [`ItemsError::Forbidden`] - The API hides unreadable
//!   collections and items behind 403
//! - **Other failures**: [`ItemsError::Transport`] - Wrapped transport error
//!
//! # Example
//!
//! ```rust,ignore
//! use strata_cms::ItemsError;
//!
//! match articles.read_one(&15u64.into(), None).await {
//!     Ok(article) => println!("Found: {}", article.title),
//!     Err(ItemsError::NotFound { collection, id }) => {
//!         println!("No item {id} in {collection}");
//!     }
//!     Err(ItemsError::Forbidden { collection }) => {
//!         println!("No read permission on {collection}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::items::ItemId;
use crate::transport::TransportError;

/// Error type for item operations.
///
/// This enum provides semantic error types for item operations, mapping
/// HTTP error codes to meaningful variants while preserving the request ID
/// for debugging.
#[derive(Debug, Error)]
pub enum ItemsError {
    /// The item was not found (HTTP 404).
    #[error("Item {id} not found in collection {collection}")]
    NotFound {
        /// The collection that was queried.
        collection: String,
        /// The id that was requested.
        id: String,
    },

    /// Access to the collection or item was denied (HTTP 403).
    #[error("Access to collection {collection} was denied")]
    Forbidden {
        /// The collection that was queried.
        collection: String,
    },

    /// A successful response carried no `data` payload where one is required.
    #[error("Response for collection {collection} contained no data")]
    MissingData {
        /// The collection that was queried.
        collection: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ItemsError {
    /// Maps a transport error to its semantic variant for a collection.
    ///
    /// 404 becomes [`NotFound`](Self::NotFound) and 403 becomes
    /// [`Forbidden`](Self::Forbidden); anything else is passed through.
    pub(crate) fn from_transport(
        error: TransportError,
        collection: &str,
        id: Option<&ItemId>,
    ) -> Self {
        if let TransportError::Response(response) = &error {
            match response.code {
                404 => {
                    return Self::NotFound {
                        collection: collection.to_string(),
                        id: id.map_or_else(|| "unknown".to_string(), ToString::to_string),
                    }
                }
                403 => {
                    return Self::Forbidden {
                        collection: collection.to_string(),
                    }
                }
                _ => {}
            }
        }
        Self::Transport(error)
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Transport(TransportError::Response(e)) => e.request_id.as_deref(),
            Self::Transport(TransportError::MaxRetries(e)) => e.request_id.as_deref(),
            _ => None,
        }
    }
}
