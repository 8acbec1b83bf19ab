//! Response wrapper for collection-level item operations.

use crate::transport::ResponseMeta;

/// Items returned by a collection-level operation, plus any result
/// metadata the server reported.
///
/// `meta` is populated when the request asked for counts via
/// [`MetaRequest`](crate::MetaRequest).
///
/// # Example
///
/// ```rust,ignore
/// let articles = client.items::<Article>("articles");
/// let result = articles.read_many(Some(&QueryMany::new().limit(10))).await?;
///
/// for article in &result.data {
///     println!("{}", article.title);
/// }
/// if let Some(meta) = result.meta {
///     println!("{:?} of {:?} match", meta.filter_count, meta.total_count);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ManyItems<T> {
    /// The returned items. Empty when the operation matched nothing.
    pub data: Vec<T>,
    /// Result metadata, when requested.
    pub meta: Option<ResponseMeta>,
}

impl<T> ManyItems<T> {
    /// Creates a result from its parts.
    #[must_use]
    pub const fn new(data: Vec<T>, meta: Option<ResponseMeta>) -> Self {
        Self { data, meta }
    }

    /// Number of returned items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no items were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the returned items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the result and returns the items.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T> IntoIterator for ManyItems<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ManyItems<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_is_empty() {
        let empty: ManyItems<u64> = ManyItems::new(vec![], None);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let full = ManyItems::new(vec![1, 2, 3], None);
        assert!(!full.is_empty());
        assert_eq!(full.len(), 3);
    }

    #[test]
    fn test_iteration() {
        let result = ManyItems::new(vec![10, 20], None);
        let doubled: Vec<u64> = result.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![20, 40]);

        let collected: Vec<u64> = result.into_iter().collect();
        assert_eq!(collected, vec![10, 20]);
    }

    #[test]
    fn test_into_data_returns_items() {
        let result = ManyItems::new(vec!["a", "b"], None);
        assert_eq!(result.into_data(), vec!["a", "b"]);
    }

    #[test]
    fn test_meta_passthrough() {
        let meta = ResponseMeta {
            total_count: Some(100),
            filter_count: Some(7),
        };
        let result = ManyItems::new(vec![1], Some(meta));
        assert_eq!(result.meta.unwrap().total_count, Some(100));
    }
}
