//! HTTP response types for the Strata SDK.
//!
//! This module provides the raw [`HttpResponse`] type plus the typed
//! [`TransportResponse`] envelope that API payloads deserialize into.

use std::collections::HashMap;

use serde::Deserialize;

/// Result metadata reported by the API alongside collection payloads.
///
/// Populated when a request asks for metadata via the `meta` query
/// parameter (`total_count`, `filter_count`, or `*`).
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ResponseMeta {
    /// Total number of items in the collection.
    pub total_count: Option<u64>,
    /// Number of items matching the request's filter.
    pub filter_count: Option<u64>,
}

/// The parsed `{data, meta}` envelope every API payload is wrapped in.
///
/// `data` is `None` when the response carried no payload (e.g. 204 replies)
/// or an explicit `null`.
///
/// # Example
///
/// ```rust
/// use strata_cms::TransportResponse;
/// use serde_json::json;
///
/// let envelope: TransportResponse<Vec<String>> =
///     serde_json::from_value(json!({"data": ["a", "b"]})).unwrap();
///
/// assert_eq!(envelope.data, Some(vec!["a".to_string(), "b".to_string()]));
/// assert!(envelope.meta.is_none());
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct TransportResponse<T> {
    /// The payload of the response.
    pub data: Option<T>,
    /// Result metadata, when requested.
    pub meta: Option<ResponseMeta>,
}

impl<T> TransportResponse<T> {
    /// Creates an envelope directly, for tests and custom transports.
    #[must_use]
    pub const fn new(data: Option<T>, meta: Option<ResponseMeta>) -> Self {
        Self { data, meta }
    }

    /// An envelope with no payload and no metadata.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            meta: None,
        }
    }
}

/// A raw HTTP response from the Strata API.
///
/// Contains the response status code, headers, and body as parsed JSON.
/// Typed access goes through [`TransportResponse`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// Header names are expected in lowercase. The `Retry-After` header
    /// is parsed into `retry_request_after`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
