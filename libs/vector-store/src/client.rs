use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::collection::Collection;
use crate::distance::DistanceMetric;
use crate::error::{StoreError, StoreResult};

/// Entry point to the store. Owns every collection by name.
///
/// Cloning is cheap and clones share the same collections.
#[derive(Debug, Clone, Default)]
pub struct Client {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection. Fails if the name is taken.
    pub async fn create_collection(
        &self,
        name: &str,
        metric: DistanceMetric,
    ) -> StoreResult<Collection> {
        let mut collections = self.collections.write().await;

        if collections.contains_key(name) {
            return Err(StoreError::CollectionExists(name.to_string()));
        }

        let collection = Collection::new(name, metric);
        collections.insert(name.to_string(), collection.clone());

        tracing::info!(collection = %name, metric = %metric, "Created collection");
        Ok(collection)
    }

    pub async fn get_collection(&self, name: &str) -> StoreResult<Collection> {
        self.collections
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_string()))
    }

    /// Fetch a collection, creating it when absent.
    ///
    /// Lookup and creation happen under one write lock, so concurrent callers
    /// always end up with the same collection. An existing collection is
    /// returned as is, even if it was created with another metric.
    pub async fn get_or_create_collection(
        &self,
        name: &str,
        metric: DistanceMetric,
    ) -> StoreResult<Collection> {
        let mut collections = self.collections.write().await;

        if let Some(existing) = collections.get(name) {
            if existing.metric() != metric {
                tracing::warn!(
                    collection = %name,
                    existing = %existing.metric(),
                    requested = %metric,
                    "Collection already exists with a different metric, keeping the existing one"
                );
            }
            return Ok(existing.clone());
        }

        let collection = Collection::new(name, metric);
        collections.insert(name.to_string(), collection.clone());

        tracing::info!(collection = %name, metric = %metric, "Created collection");
        Ok(collection)
    }

    /// Collection names, sorted.
    pub async fn list_collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop a collection. Outstanding handles keep working on the
    /// detached records until they are dropped.
    pub async fn delete_collection(&self, name: &str) -> StoreResult<()> {
        match self.collections.write().await.remove(name) {
            Some(_) => {
                tracing::info!(collection = %name, "Deleted collection");
                Ok(())
            }
            None => Err(StoreError::CollectionNotFound(name.to_string())),
        }
    }
}
