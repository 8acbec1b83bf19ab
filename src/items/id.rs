//! Item identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The primary key of an item.
///
/// Collections may use numeric or string primary keys (including UUIDs),
/// so ids are a union of both. Ids serialize as their raw JSON value, not
/// as a tagged enum.
///
/// # Example
///
/// ```rust
/// use strata_cms::ItemId;
///
/// let numeric = ItemId::from(15u64);
/// let uuid = ItemId::from("8cbb43fe-4cdf-4991-8352-c461779cec02");
///
/// assert_eq!(numeric.to_string(), "15");
/// assert_eq!(serde_json::to_string(&numeric).unwrap(), "15");
/// assert_eq!(
///     serde_json::to_string(&uuid).unwrap(),
///     r#""8cbb43fe-4cdf-4991-8352-c461779cec02""#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// A numeric primary key.
    Number(u64),
    /// A string primary key (slugs, UUIDs).
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self::Number(u64::from(id))
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}
