//! Transport abstraction for the Strata SDK.
//!
//! The items layer never talks HTTP directly; it delegates every network
//! call to an injected [`Transport`]. This module defines that seam plus the
//! request/response plumbing, and provides [`HttpTransport`], the default
//! reqwest-based implementation.
//!
//! # Custom Transports
//!
//! Implement [`Transport`] to route SDK calls through your own HTTP stack
//! (connection pooling, custom auth refresh, test doubles):
//!
//! ```rust,ignore
//! use strata_cms::{Transport, TransportResponse, TransportError};
//!
//! struct RecordingTransport { /* ... */ }
//!
//! impl Transport for RecordingTransport {
//!     async fn get<T: DeserializeOwned>(
//!         &self,
//!         path: &str,
//!         query: Option<HashMap<String, String>>,
//!     ) -> Result<TransportResponse<T>, TransportError> {
//!         // record, replay, forward...
//!     }
//!     // post / patch / delete ...
//! }
//! ```

mod errors;
mod http;
mod request;
mod response;

pub use errors::{
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, TransportError,
};
pub use http::{HttpTransport, RETRY_WAIT_TIME, SDK_VERSION};
pub use request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use response::{HttpResponse, ResponseMeta, TransportResponse};

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// The injected network seam every handler operation goes through.
///
/// A transport receives a rooted path (e.g. `/items/articles`), an optional
/// flat query-parameter map, and for write operations a JSON body. It is
/// responsible for everything below that: URL construction, headers, auth,
/// serialization, and any retry or failure handling it chooses to provide.
///
/// Responses come back as the typed [`TransportResponse`] envelope.
///
/// Implementations are used behind generics (static dispatch), so methods
/// may be generic over the payload type.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends a GET request and parses the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for validation, network, decode, or
    /// non-2xx response failures.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<TransportResponse<T>, TransportError>;

    /// Sends a POST request with a JSON body and parses the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for validation, network, decode, or
    /// non-2xx response failures.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<TransportResponse<T>, TransportError>;

    /// Sends a PATCH request with a JSON body and parses the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for validation, network, decode, or
    /// non-2xx response failures.
    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<TransportResponse<T>, TransportError>;

    /// Sends a DELETE request, optionally with a JSON body (batch deletes).
    ///
    /// Successful deletions return no payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for validation, network, or non-2xx
    /// response failures.
    async fn delete(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), TransportError>;
}
