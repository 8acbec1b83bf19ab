//! The typed items handler.
//!
//! [`ItemsHandler`] is the mapping layer of the SDK: each method pairs one
//! API operation with one HTTP call, constructing the endpoint URL,
//! reshaping query parameters, delegating to the injected [`Transport`],
//! and reshaping the response envelope. No state, no caching, no retry
//! logic lives here; all of that belongs to the transport.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::items::aggregate::AggregateQuery;
use crate::items::errors::ItemsError;
use crate::items::id::ItemId;
use crate::items::query::{QueryMany, QueryOne};
use crate::items::response::ManyItems;
use crate::transport::{Transport, TransportError};

/// Collections with this prefix are system collections, exposed at the API
/// root rather than under `/items/`.
pub const SYSTEM_COLLECTION_PREFIX: &str = "strata_";

/// Resolves a collection name to its endpoint.
///
/// System collections (`strata_users`, `strata_files`, ...) live at the API
/// root (`/users`, `/files`); user collections live under `/items/`.
#[must_use]
pub fn collection_endpoint(collection: &str) -> String {
    collection.strip_prefix(SYSTEM_COLLECTION_PREFIX).map_or_else(
        || format!("/items/{collection}"),
        |system| format!("/{system}"),
    )
}

/// A typed handler for one collection of items.
///
/// The handler is parameterized over the item type `T` (any
/// serde-deserializable struct matching the collection's fields) and the
/// transport `C` performing the actual network calls.
///
/// Handlers are cheap to clone; they share the transport.
///
/// # Example
///
/// ```rust,ignore
/// use serde::{Deserialize, Serialize};
/// use strata_cms::{QueryMany, StrataClient};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Article {
///     id: u64,
///     title: String,
///     status: String,
/// }
///
/// let client = StrataClient::new(&config);
/// let articles = client.items::<Article>("articles");
///
/// let one = articles.read_one(&15u64.into(), None).await?;
/// let many = articles.read_many(Some(&QueryMany::new().limit(10))).await?;
/// ```
pub struct ItemsHandler<T, C> {
    collection: String,
    endpoint: String,
    transport: Arc<C>,
    _item: PhantomData<fn() -> T>,
}

impl<T, C> fmt::Debug for ItemsHandler<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemsHandler")
            .field("collection", &self.collection)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl<T, C> Clone for ItemsHandler<T, C> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            endpoint: self.endpoint.clone(),
            transport: Arc::clone(&self.transport),
            _item: PhantomData,
        }
    }
}

/// Body shape for updating a set of ids with one patch.
#[derive(Serialize)]
struct BatchUpdateBody<'a, P> {
    keys: &'a [ItemId],
    data: &'a P,
}

/// Body shape for updating all items a query selects.
#[derive(Serialize)]
struct QueryUpdateBody<'a, P> {
    query: &'a QueryMany,
    data: &'a P,
}

impl<T, C> ItemsHandler<T, C>
where
    T: DeserializeOwned,
    C: Transport,
{
    /// Creates a handler for the given collection.
    pub(crate) fn new(collection: impl Into<String>, transport: Arc<C>) -> Self {
        let collection = collection.into();
        let endpoint = collection_endpoint(&collection);
        Self {
            collection,
            endpoint,
            transport,
            _item: PhantomData,
        }
    }

    /// Returns the collection name this handler operates on.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the resolved endpoint for this collection.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the path for a single item, percent-encoding the id.
    fn item_path(&self, id: &ItemId) -> String {
        format!("{}/{}", self.endpoint, urlencoding::encode(&id.to_string()))
    }

    /// Reads a single item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::NotFound`] if the item doesn't exist,
    /// [`ItemsError::Forbidden`] if it isn't readable, and
    /// [`ItemsError::MissingData`] if the response carried no payload.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let article = articles.read_one(&15u64.into(), None).await?;
    /// ```
    pub async fn read_one(&self, id: &ItemId, query: Option<&QueryOne>) -> Result<T, ItemsError> {
        let params = query
            .map(QueryOne::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;

        let response = self
            .transport
            .get::<T>(&self.item_path(id), params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, Some(id)))?;

        response.data.ok_or_else(|| ItemsError::MissingData {
            collection: self.collection.clone(),
        })
    }

    /// Reads all items matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't readable,
    /// or a wrapped transport error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_cms::{MetaRequest, QueryMany};
    /// use serde_json::json;
    ///
    /// let published = articles
    ///     .read_many(Some(
    ///         &QueryMany::new()
    ///             .filter(json!({"status": {"_eq": "published"}}))
    ///             .meta(MetaRequest::FilterCount),
    ///     ))
    ///     .await?;
    /// ```
    pub async fn read_many(&self, query: Option<&QueryMany>) -> Result<ManyItems<T>, ItemsError> {
        let params = query
            .map(QueryMany::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;

        let response = self
            .transport
            .get::<Vec<T>>(&self.endpoint, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))?;

        Ok(ManyItems::new(
            response.data.unwrap_or_default(),
            response.meta,
        ))
    }

    /// Creates a single item from a partial payload.
    ///
    /// Returns the created item as the server stored it (including
    /// server-generated fields).
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't writable,
    /// [`ItemsError::MissingData`] if the response carried no payload, or a
    /// wrapped transport error.
    pub async fn create_one<P: Serialize>(
        &self,
        item: &P,
        query: Option<&QueryOne>,
    ) -> Result<T, ItemsError> {
        let params = query
            .map(QueryOne::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;
        let body = serde_json::to_value(item).map_err(TransportError::from)?;

        let response = self
            .transport
            .post::<T>(&self.endpoint, body, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))?;

        response.data.ok_or_else(|| ItemsError::MissingData {
            collection: self.collection.clone(),
        })
    }

    /// Creates several items from partial payloads.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't writable,
    /// or a wrapped transport error.
    pub async fn create_many<P: Serialize>(
        &self,
        items: &[P],
        query: Option<&QueryMany>,
    ) -> Result<ManyItems<T>, ItemsError> {
        let params = query
            .map(QueryMany::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;
        let body = serde_json::to_value(items).map_err(TransportError::from)?;

        let response = self
            .transport
            .post::<Vec<T>>(&self.endpoint, body, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))?;

        Ok(ManyItems::new(
            response.data.unwrap_or_default(),
            response.meta,
        ))
    }

    /// Applies a partial update to a single item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::NotFound`] if the item doesn't exist,
    /// [`ItemsError::Forbidden`] if it isn't writable, and
    /// [`ItemsError::MissingData`] if the response carried no payload.
    pub async fn update_one<P: Serialize>(
        &self,
        id: &ItemId,
        item: &P,
        query: Option<&QueryOne>,
    ) -> Result<T, ItemsError> {
        let params = query
            .map(QueryOne::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;
        let body = serde_json::to_value(item).map_err(TransportError::from)?;

        let response = self
            .transport
            .patch::<T>(&self.item_path(id), body, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, Some(id)))?;

        response.data.ok_or_else(|| ItemsError::MissingData {
            collection: self.collection.clone(),
        })
    }

    /// Applies one partial update to every item in a set of ids.
    ///
    /// The request body carries `{"keys": ids, "data": patch}`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't writable,
    /// or a wrapped transport error.
    pub async fn update_many<P: Serialize>(
        &self,
        ids: &[ItemId],
        data: &P,
        query: Option<&QueryMany>,
    ) -> Result<ManyItems<T>, ItemsError> {
        let params = query
            .map(QueryMany::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;
        let body =
            serde_json::to_value(BatchUpdateBody { keys: ids, data }).map_err(TransportError::from)?;

        let response = self
            .transport
            .patch::<Vec<T>>(&self.endpoint, body, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))?;

        Ok(ManyItems::new(
            response.data.unwrap_or_default(),
            response.meta,
        ))
    }

    /// Applies one partial update to every item a query selects.
    ///
    /// The selection query travels as a JSON object in the request body
    /// (`{"query": ..., "data": ...}`), not in the query string; `query`
    /// still shapes the returned items.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't writable,
    /// or a wrapped transport error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    /// use strata_cms::QueryMany;
    ///
    /// // Archive everything still in draft
    /// articles
    ///     .update_by_query(
    ///         &QueryMany::new().filter(json!({"status": {"_eq": "draft"}})),
    ///         &json!({"status": "archived"}),
    ///         None,
    ///     )
    ///     .await?;
    /// ```
    pub async fn update_by_query<P: Serialize>(
        &self,
        update_query: &QueryMany,
        data: &P,
        query: Option<&QueryMany>,
    ) -> Result<ManyItems<T>, ItemsError> {
        let params = query
            .map(QueryMany::to_query_params)
            .transpose()
            .map_err(TransportError::from)?;
        let body = serde_json::to_value(QueryUpdateBody {
            query: update_query,
            data,
        })
        .map_err(TransportError::from)?;

        let response = self
            .transport
            .patch::<Vec<T>>(&self.endpoint, body, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))?;

        Ok(ManyItems::new(
            response.data.unwrap_or_default(),
            response.meta,
        ))
    }

    /// Deletes a single item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::NotFound`] if the item doesn't exist, or
    /// [`ItemsError::Forbidden`] if it isn't deletable.
    pub async fn delete_one(&self, id: &ItemId) -> Result<(), ItemsError> {
        self.transport
            .delete(&self.item_path(id), None)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, Some(id)))
    }

    /// Deletes several items by id.
    ///
    /// The ids travel as a JSON array in the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't writable,
    /// or a wrapped transport error.
    pub async fn delete_many(&self, ids: &[ItemId]) -> Result<(), ItemsError> {
        let body = serde_json::to_value(ids).map_err(TransportError::from)?;

        self.transport
            .delete(&self.endpoint, Some(body))
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))
    }

    /// Runs an aggregation over the collection.
    ///
    /// The query is flattened into the `aggregate`/`groupBy` parameters the
    /// server expects. Aggregated rows do not have the collection's item
    /// shape, so they are returned as raw JSON values.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::Forbidden`] if the collection isn't readable,
    /// or a wrapped transport error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_cms::AggregateQuery;
    ///
    /// let per_author = articles
    ///     .aggregate(&AggregateQuery::new().count("*").group_by(["author"]))
    ///     .await?;
    /// ```
    pub async fn aggregate(
        &self,
        query: &AggregateQuery,
    ) -> Result<ManyItems<Value>, ItemsError> {
        let params = query.to_query_params();
        let params = if params.is_empty() { None } else { Some(params) };

        let response = self
            .transport
            .get::<Vec<Value>>(&self.endpoint, params)
            .await
            .map_err(|e| ItemsError::from_transport(e, &self.collection, None))?;

        Ok(ManyItems::new(
            response.data.unwrap_or_default(),
            response.meta,
        ))
    }
}
