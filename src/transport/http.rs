//! Default HTTP transport built on reqwest.
//!
//! This module provides [`HttpTransport`], the SDK's default [`Transport`]
//! implementation. It owns the concerns the items layer delegates away:
//! base-URL construction, default headers, bearer authentication, JSON
//! envelope parsing, and bounded retry handling for 429 and 500 responses.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::config::StrataConfig;
use crate::transport::errors::{
    HttpResponseError, MaxHttpRetriesExceededError, TransportError,
};
use crate::transport::request::{HttpMethod, HttpRequest};
use crate::transport::response::{HttpResponse, TransportResponse};
use crate::transport::Transport;

/// Fixed retry wait time in seconds, used when the server sends no
/// `Retry-After` header.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for making requests to the Strata API.
///
/// The transport handles:
/// - Base URL construction from the configured [`BaseUrl`](crate::BaseUrl)
/// - Default headers including User-Agent and bearer authentication
/// - Automatic retry logic for 429 and 500 responses
/// - Parsing the `{data, meta}` response envelope
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use strata_cms::{BaseUrl, HttpTransport, StaticToken, StrataConfig, Transport};
///
/// let config = StrataConfig::builder()
///     .base_url(BaseUrl::new("https://cms.example.com")?)
///     .access_token(StaticToken::new("my-token")?)
///     .build()?;
///
/// let transport = HttpTransport::new(&config);
/// let articles: TransportResponse<Vec<Article>> =
///     transport.get("/items/articles", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://cms.example.com`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a new HTTP transport for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_cms::{BaseUrl, HttpTransport, StrataConfig};
    ///
    /// let config = StrataConfig::builder()
    ///     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let transport = HttpTransport::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &StrataConfig) -> Self {
        let base_url = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Strata API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Add bearer auth header if a token is configured
        if let Some(token) = config.access_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this transport.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Strata API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    /// - Retry logic for 429 and 500 responses
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}", self.base_url, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Retry loop
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            // Build the reqwest request
            let mut req_builder = match request.method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            // Add headers
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Add query params
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            // Add body
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // Send request
            let res = req_builder.send().await?;

            // Parse response
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            // Parse body as JSON
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // For 5xx errors, keep the raw body around for diagnostics
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            // Only rate limiting and transient server failures are retried
            let should_retry = code == 429 || code == 500;
            if !should_retry {
                return Err(TransportError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    request_id: response.request_id().map(String::from),
                }));
            }

            // Check if we've exhausted retries
            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(TransportError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        request_id: response.request_id().map(String::from),
                    }));
                }
                return Err(TransportError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    request_id: response.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                "Request to {} failed with status {}, retrying in {:?} (attempt {}/{})",
                request.path,
                code,
                delay,
                tries,
                request.tries
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Sends a request and parses the `{data, meta}` envelope.
    async fn request_parsed<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<TransportResponse<T>, TransportError> {
        let response = self.request(request).await?;

        if response.body.as_object().is_some_and(serde_json::Map::is_empty) {
            // 204-style replies parse to an empty object
            return Ok(TransportResponse::empty());
        }

        Ok(serde_json::from_value(response.body)?)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 500: always use fixed delay (ignore Retry-After)
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an error response body to JSON for error messages.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "request_id".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Transport for HttpTransport {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<TransportResponse<T>, TransportError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request_parsed(builder.build()?).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<TransportResponse<T>, TransportError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, path).body(body);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request_parsed(builder.build()?).await
    }

    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<TransportResponse<T>, TransportError> {
        let mut builder = HttpRequest::builder(HttpMethod::Patch, path).body(body);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request_parsed(builder.build()?).await
    }

    async fn delete(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), TransportError> {
        let mut builder = HttpRequest::builder(HttpMethod::Delete, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await?;
        Ok(())
    }
}
