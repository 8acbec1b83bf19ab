//! Query types for item operations.
//!
//! [`QueryOne`] shapes single-item reads (field selection, relational depth),
//! and [`QueryMany`] extends it with collection-level parameters (filtering,
//! search, sorting, pagination, metadata requests).
//!
//! Queries serialize two ways:
//!
//! - into a flat query-string map for request URLs, where arrays become
//!   comma-joined lists and nested objects (filter, deep, alias) become JSON
//!   strings;
//! - into a plain JSON object via `serde`, which is how `update_by_query`
//!   embeds its selection query in the request body.
//!
//! # Example
//!
//! ```rust
//! use strata_cms::QueryMany;
//! use serde_json::json;
//!
//! let query = QueryMany::new()
//!     .fields(["id", "title", "author.name"])
//!     .filter(json!({"status": {"_eq": "published"}}))
//!     .sort(["-published_on"])
//!     .limit(25);
//!
//! let params = query.to_query_params().unwrap();
//! assert_eq!(params.get("fields").unwrap(), "id,title,author.name");
//! assert_eq!(params.get("limit").unwrap(), "25");
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

/// Which result counts the server should report in the response `meta`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MetaRequest {
    /// Report the total number of items in the collection.
    #[serde(rename = "total_count")]
    TotalCount,
    /// Report the number of items matching the filter.
    #[serde(rename = "filter_count")]
    FilterCount,
    /// Report every available count.
    #[serde(rename = "*")]
    All,
}

/// Query parameters for single-item reads.
///
/// # Example
///
/// ```rust
/// use strata_cms::QueryOne;
///
/// let query = QueryOne::new().fields(["id", "title", "author.name"]);
/// let params = query.to_query_params().unwrap();
/// assert_eq!(params.get("fields").unwrap(), "id,title,author.name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryOne {
    /// Fields (dot-notation for relations) to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Per-relation query parameters, as a nested object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep: Option<Value>,
    /// Field aliases: response key to field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<BTreeMap<String, String>>,
}

impl QueryOne {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields to return.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets per-relation query parameters.
    #[must_use]
    pub fn deep(mut self, deep: Value) -> Self {
        self.deep = Some(deep);
        self
    }

    /// Adds a field alias.
    #[must_use]
    pub fn alias(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.alias
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), field.into());
        self
    }

    /// Serializes the query into a flat query-string map.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the query cannot be serialized,
    /// which cannot happen for values constructed through the builder.
    pub fn to_query_params(&self) -> Result<HashMap<String, String>, serde_json::Error> {
        serialize_to_query(self)
    }
}

/// Query parameters for collection-level operations.
///
/// Extends the single-item parameters with filtering, search, sorting,
/// pagination, and metadata requests.
///
/// # Example
///
/// ```rust
/// use strata_cms::{MetaRequest, QueryMany};
/// use serde_json::json;
///
/// let query = QueryMany::new()
///     .filter(json!({"status": {"_eq": "published"}}))
///     .sort(["-published_on", "title"])
///     .limit(10)
///     .page(2)
///     .meta(MetaRequest::FilterCount);
///
/// let params = query.to_query_params().unwrap();
/// assert_eq!(params.get("sort").unwrap(), "-published_on,title");
/// assert_eq!(params.get("meta").unwrap(), "filter_count");
/// assert_eq!(
///     params.get("filter").unwrap(),
///     r#"{"status":{"_eq":"published"}}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryMany {
    /// Fields (dot-notation for relations) to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Per-relation query parameters, as a nested object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep: Option<Value>,
    /// Field aliases: response key to field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<BTreeMap<String, String>>,
    /// Filter object selecting which items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Full-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort fields; prefix with `-` for descending order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
    /// Maximum number of items to return; `-1` for no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Page number (1-indexed); an alternative to `offset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Which result counts to report in the response metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaRequest>,
}

impl QueryMany {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields to return.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets per-relation query parameters.
    #[must_use]
    pub fn deep(mut self, deep: Value) -> Self {
        self.deep = Some(deep);
        self
    }

    /// Adds a field alias.
    #[must_use]
    pub fn alias(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.alias
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), field.into());
        self
    }

    /// Sets the filter object.
    #[must_use]
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the full-text search term.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = Some(sort.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the maximum number of items to return.
    #[must_use]
    pub const fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of items to skip.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page number (1-indexed).
    #[must_use]
    pub const fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Requests result counts in the response metadata.
    #[must_use]
    pub const fn meta(mut self, meta: MetaRequest) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Serializes the query into a flat query-string map.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the query cannot be serialized,
    /// which cannot happen for values constructed through the builder.
    pub fn to_query_params(&self) -> Result<HashMap<String, String>, serde_json::Error> {
        serialize_to_query(self)
    }
}

/// Serializes a params struct to a flat query-parameter map.
///
/// Scalars pass through, arrays become comma-joined lists, and nested
/// objects are serialized as JSON strings. Nulls are skipped entirely.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, serde_json::Error> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {} // Skip null values
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    // Convert arrays to comma-separated values
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    // Complex objects travel as JSON strings
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
