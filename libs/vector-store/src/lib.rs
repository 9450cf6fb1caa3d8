//! In-memory vector store
//!
//! A small, process-local vector database with a collection-oriented API:
//! a [`Client`] owns named [`Collection`]s, and each collection stores
//! `(id, embedding, document)` records and answers exact nearest-neighbor
//! queries under its configured [`DistanceMetric`].
//!
//! Nothing is persisted. Every collection lives as long as the client that
//! created it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use vector_store::{Client, DistanceMetric};
//!
//! # async fn run() -> vector_store::StoreResult<()> {
//! let client = Client::new();
//! let collection = client
//!     .get_or_create_collection("default", DistanceMetric::L2)
//!     .await?;
//!
//! collection
//!     .add(
//!         vec!["a".to_string()],
//!         vec![vec![0.1, 0.2, 0.3]],
//!         vec!["hello".to_string()],
//!     )
//!     .await?;
//!
//! let result = collection.query(&[vec![0.1, 0.2, 0.31]], 1).await?;
//! assert_eq!(result.documents[0], vec!["hello".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod collection;
pub mod distance;
pub mod error;

pub use client::Client;
pub use collection::{Collection, QueryResult, Record};
pub use distance::DistanceMetric;
pub use error::{StoreError, StoreResult};
