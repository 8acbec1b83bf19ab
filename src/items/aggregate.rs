//! Aggregation queries and their flattening into server parameters.
//!
//! The server expects aggregation requests as two flat query parameters:
//! `aggregate` (a JSON object mapping function names to field specs) and
//! `groupBy` (a comma-joined field list). Callers, however, often hold the
//! query as a nested object mixing functions and grouping at arbitrary
//! depth. [`AggregateQuery::from_nested`] performs that reshaping;
//! the builder methods construct the flat form directly.
//!
//! # Example
//!
//! ```rust
//! use strata_cms::AggregateQuery;
//! use serde_json::json;
//!
//! // Built flat:
//! let query = AggregateQuery::new().count("*").group_by(["author"]);
//! let params = query.to_query_params();
//! assert_eq!(params.get("aggregate").unwrap(), r#"{"count":"*"}"#);
//! assert_eq!(params.get("groupBy").unwrap(), "author");
//!
//! // Flattened from a nested query object:
//! let nested = json!({"count": {"amount": {"groupBy": ["status"]}}});
//! let query = AggregateQuery::from_nested(&nested);
//! assert_eq!(query.group_by_fields(), ["status"]);
//! ```

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// An aggregation function the server can compute over a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AggregateFunction {
    /// Sum of the field's values.
    Sum,
    /// Average of the field's values.
    Avg,
    /// Count of items; `*` counts rows.
    Count,
    /// Maximum of the field's values.
    Max,
    /// Minimum of the field's values.
    Min,
}

impl AggregateFunction {
    /// Returns the parameter key the server expects for this function.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Count => "count",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Recognizes an aggregation-function key in a nested query object.
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "sum" => Some(Self::Sum),
            "avg" => Some(Self::Avg),
            "count" => Some(Self::Count),
            "max" => Some(Self::Max),
            "min" => Some(Self::Min),
            _ => None,
        }
    }
}

/// An aggregation query over a collection.
///
/// Holds the flat shape the server expects: a map of aggregation functions
/// to their field specs, plus the grouping fields. Function specs are kept
/// as raw JSON values and forwarded verbatim, matching how the server
/// accepts either a single field name, `"*"`, or a field list per function.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateQuery {
    functions: BTreeMap<AggregateFunction, Value>,
    group_by: Vec<String>,
}

impl AggregateQuery {
    /// Creates an empty aggregation query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an aggregation function over a field spec.
    ///
    /// Adding the same function twice replaces its previous spec.
    #[must_use]
    pub fn function(mut self, function: AggregateFunction, field: impl Into<String>) -> Self {
        self.functions
            .insert(function, Value::String(field.into()));
        self
    }

    /// Counts items; pass `"*"` to count rows.
    #[must_use]
    pub fn count(self, field: impl Into<String>) -> Self {
        self.function(AggregateFunction::Count, field)
    }

    /// Sums a field.
    #[must_use]
    pub fn sum(self, field: impl Into<String>) -> Self {
        self.function(AggregateFunction::Sum, field)
    }

    /// Averages a field.
    #[must_use]
    pub fn avg(self, field: impl Into<String>) -> Self {
        self.function(AggregateFunction::Avg, field)
    }

    /// Takes the maximum of a field.
    #[must_use]
    pub fn max(self, field: impl Into<String>) -> Self {
        self.function(AggregateFunction::Max, field)
    }

    /// Takes the minimum of a field.
    #[must_use]
    pub fn min(self, field: impl Into<String>) -> Self {
        self.function(AggregateFunction::Min, field)
    }

    /// Adds grouping fields.
    #[must_use]
    pub fn group_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Returns the grouping fields.
    #[must_use]
    pub fn group_by_fields(&self) -> &[String] {
        &self.group_by
    }

    /// Returns `true` if no functions and no grouping were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.group_by.is_empty()
    }

    /// Flattens a nested aggregation object into the flat query shape.
    ///
    /// Walks the object recursively: keys naming an aggregation function
    /// contribute their value to the `aggregate` map, a `groupBy` key
    /// contributes its value to the grouping list, and all object values
    /// are descended into. When the same key occurs at several depths the
    /// deepest occurrence wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_cms::AggregateQuery;
    /// use serde_json::json;
    ///
    /// let nested = json!({
    ///     "sum": {"amount": {"count": "*"}},
    ///     "groupBy": ["status", "author"]
    /// });
    ///
    /// let query = AggregateQuery::from_nested(&nested);
    /// let params = query.to_query_params();
    /// assert!(params.get("aggregate").unwrap().contains(r#""count":"*""#));
    /// assert_eq!(params.get("groupBy").unwrap(), "status,author");
    /// ```
    #[must_use]
    pub fn from_nested(query: &Value) -> Self {
        let mut out = Self::default();
        collect(query, &mut out);
        out
    }

    /// Serializes the query into the flat query-string map the server expects.
    #[must_use]
    pub fn to_query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();

        if !self.functions.is_empty() {
            let aggregate: serde_json::Map<String, Value> = self
                .functions
                .iter()
                .map(|(function, spec)| (function.as_str().to_string(), spec.clone()))
                .collect();
            params.insert(
                "aggregate".to_string(),
                Value::Object(aggregate).to_string(),
            );
        }

        if !self.group_by.is_empty() {
            params.insert("groupBy".to_string(), self.group_by.join(","));
        }

        params
    }
}

/// Recursive walk collecting aggregation entries at any depth.
fn collect(value: &Value, out: &mut AggregateQuery) {
    let Value::Object(map) = value else {
        return;
    };

    for (key, val) in map {
        if let Some(function) = AggregateFunction::from_key(key) {
            out.functions.insert(function, val.clone());
        } else if key == "groupBy" {
            out.group_by = group_by_fields(val);
        }
        collect(val, out);
    }
}

/// Extracts grouping field names from a `groupBy` value.
fn group_by_fields(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(arr) => arr
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
