use async_trait::async_trait;
use vector_store::{Client, Collection, DistanceMetric};

use crate::error::DocumentResult;
use crate::models::Document;

/// Repository trait for document persistence and similarity search
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Store a document, replacing any document with the same id
    async fn upsert(&self, document: Document) -> DocumentResult<()>;

    /// Texts of the `n_results` documents nearest to `vector`, nearest first
    async fn query(&self, vector: Vec<f32>, n_results: usize) -> DocumentResult<Vec<String>>;

    /// Number of stored documents
    async fn count(&self) -> DocumentResult<usize>;
}

/// DocumentRepository backed by a vector store collection
#[derive(Clone)]
pub struct StoreDocumentRepository {
    collection: Collection,
}

impl StoreDocumentRepository {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    /// Get or create the named collection on `client` and wrap it
    pub async fn connect(
        client: &Client,
        name: &str,
        metric: DistanceMetric,
    ) -> DocumentResult<Self> {
        let collection = client.get_or_create_collection(name, metric).await?;
        tracing::info!(
            collection = collection.name(),
            metric = %collection.metric(),
            "Document collection ready"
        );
        Ok(Self::new(collection))
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}

#[async_trait]
impl DocumentRepository for StoreDocumentRepository {
    async fn upsert(&self, document: Document) -> DocumentResult<()> {
        let Document {
            id,
            text,
            embedding,
        } = document;
        self.collection
            .upsert(vec![id], vec![embedding], vec![text])
            .await?;
        Ok(())
    }

    async fn query(&self, vector: Vec<f32>, n_results: usize) -> DocumentResult<Vec<String>> {
        let result = self.collection.query(&[vector], n_results).await?;
        Ok(result.documents.into_iter().next().unwrap_or_default())
    }

    async fn count(&self) -> DocumentResult<usize> {
        Ok(self.collection.count().await)
    }
}
