//! # Strata CMS Rust SDK
//!
//! A Rust SDK for the Strata headless CMS REST API, providing typed access
//! to collections of items over an injectable transport.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StrataConfig`] and [`StrataConfigBuilder`]
//! - Validated newtypes for the API base URL and access token
//! - A [`Transport`] abstraction with a reqwest-based default
//!   ([`HttpTransport`]) handling headers, auth, and retry behavior
//! - Typed per-collection handlers ([`ItemsHandler`]) mapping CRUD-style
//!   calls onto the REST endpoints
//! - Query builders ([`QueryOne`], [`QueryMany`]) and aggregation support
//!   ([`AggregateQuery`]) that reshape queries into the server's wire format
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_cms::{BaseUrl, StaticToken, StrataClient, StrataConfig};
//!
//! // Create configuration using the builder pattern
//! let config = StrataConfig::builder()
//!     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
//!     .access_token(StaticToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = StrataClient::new(&config);
//! ```
//!
//! ## Reading Items
//!
//! Item types are plain serde structs matching the collection's fields:
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//! use strata_cms::{MetaRequest, QueryMany};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Article {
//!     id: u64,
//!     title: String,
//!     status: String,
//! }
//!
//! let articles = client.items::<Article>("articles");
//!
//! // Single item
//! let article = articles.read_one(&15u64.into(), None).await?;
//!
//! // Filtered collection read with counts
//! let published = articles
//!     .read_many(Some(
//!         &QueryMany::new()
//!             .filter(json!({"status": {"_eq": "published"}}))
//!             .sort(["-published_on"])
//!             .limit(25)
//!             .meta(MetaRequest::FilterCount),
//!     ))
//!     .await?;
//! println!("{} of {:?} items", published.len(), published.meta);
//! ```
//!
//! ## Writing Items
//!
//! ```rust,ignore
//! use serde_json::json;
//! use strata_cms::QueryMany;
//!
//! // Create
//! let created = articles.create_one(&json!({"title": "Hello"}), None).await?;
//!
//! // Update a set of ids with one patch
//! let ids = [1u64.into(), 2u64.into()];
//! articles.update_many(&ids, &json!({"status": "archived"}), None).await?;
//!
//! // Update everything a query selects
//! articles
//!     .update_by_query(
//!         &QueryMany::new().filter(json!({"status": {"_eq": "draft"}})),
//!         &json!({"status": "archived"}),
//!         None,
//!     )
//!     .await?;
//!
//! // Delete
//! articles.delete_one(&1u64.into()).await?;
//! ```
//!
//! ## Aggregation
//!
//! ```rust,ignore
//! use strata_cms::AggregateQuery;
//!
//! let per_author = articles
//!     .aggregate(&AggregateQuery::new().count("*").group_by(["author"]))
//!     .await?;
//! ```
//!
//! ## System Collections
//!
//! Collections prefixed with `strata_` are system collections served at the
//! API root: `client.items::<User>("strata_users")` talks to `/users`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Transport-injected**: Handlers never talk HTTP directly; everything
//!   below the path/parameter mapping is the transport's concern

pub mod client;
pub mod config;
pub mod error;
pub mod items;
pub mod transport;

// Re-export public types at crate root for convenience
pub use client::StrataClient;
pub use config::{BaseUrl, StaticToken, StrataConfig, StrataConfigBuilder};
pub use error::ConfigError;

// Re-export items types
pub use items::{
    collection_endpoint, AggregateFunction, AggregateQuery, ItemId, ItemsError, ItemsHandler,
    ManyItems, MetaRequest, QueryMany, QueryOne, SYSTEM_COLLECTION_PREFIX,
};

// Re-export transport types
pub use transport::{
    HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError, HttpTransport,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, ResponseMeta, Transport, TransportError,
    TransportResponse,
};
