//! Typed access to collections of items.
//!
//! This module is the SDK's mapping layer: [`ItemsHandler`] pairs CRUD-style
//! method calls with the API's REST endpoints, [`QueryOne`]/[`QueryMany`]
//! shape requests, and [`AggregateQuery`] covers aggregation with its
//! parameter flattening.
//!
//! Handlers are obtained from [`StrataClient::items`](crate::StrataClient::items):
//!
//! ```rust,ignore
//! let articles = client.items::<Article>("articles");
//! let drafts = articles
//!     .read_many(Some(&QueryMany::new().filter(json!({"status": {"_eq": "draft"}}))))
//!     .await?;
//! ```

mod aggregate;
mod errors;
mod handler;
mod id;
mod query;
mod response;

pub use aggregate::{AggregateFunction, AggregateQuery};
pub use errors::ItemsError;
pub use handler::{collection_endpoint, ItemsHandler, SYSTEM_COLLECTION_PREFIX};
pub use id::ItemId;
pub use query::{MetaRequest, QueryMany, QueryOne};
pub use response::ManyItems;
