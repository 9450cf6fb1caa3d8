use std::sync::Arc;

use crate::error::{DocumentError, DocumentResult};
use crate::models::{AddDocument, DEFAULT_TOP_K, Document, QueryDocuments, coerce_top_k};
use crate::repository::DocumentRepository;

/// Service layer for document ingestion and retrieval
#[derive(Clone)]
pub struct DocumentService<R: DocumentRepository> {
    repository: Arc<R>,
}

impl<R: DocumentRepository> DocumentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store a document under the id derived from its text.
    ///
    /// Re-adding the same text replaces its embedding.
    pub async fn add_document(&self, input: AddDocument) -> DocumentResult<Document> {
        let (Some(text), Some(embedding)) = (input.text, input.embedding) else {
            return Err(DocumentError::MissingTextOrEmbedding);
        };

        let document = Document::new(text, embedding);
        self.repository
            .upsert(document.clone())
            .await
            .inspect_err(|e| {
                tracing::error!(id = %document.id, error = %e, "Failed to add document");
            })?;

        tracing::debug!(
            id = %document.id,
            dimension = document.embedding.len(),
            "Document stored"
        );
        Ok(document)
    }

    /// Texts of the nearest documents to `input.vector`, nearest first
    pub async fn query_documents(&self, input: QueryDocuments) -> DocumentResult<Vec<String>> {
        let vector = input.vector.ok_or(DocumentError::MissingVector)?;

        let n_results = match input.top_k {
            None => Some(DEFAULT_TOP_K),
            Some(ref raw) => coerce_top_k(raw),
        }
        .and_then(|k| usize::try_from(k).ok())
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            let raw = input.top_k.as_ref().map(ToString::to_string).unwrap_or_default();
            DocumentError::InvalidTopK(raw)
        })
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected query"))?;

        self.repository
            .query(vector, n_results)
            .await
            .inspect_err(|e| {
                tracing::error!(top_k = n_results, error = %e, "Failed to query documents");
            })
    }

    pub async fn count_documents(&self) -> DocumentResult<usize> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDocumentRepository;
    use mockall::predicate::{always, eq};
    use serde_json::json;
    use vector_store::StoreError;

    #[tokio::test]
    async fn test_add_document_requires_text_and_embedding() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo.expect_upsert().never();
        let service = DocumentService::new(mock_repo);

        let missing_embedding = AddDocument {
            text: Some("hello".to_string()),
            embedding: None,
        };
        let missing_text = AddDocument {
            text: None,
            embedding: Some(vec![0.1]),
        };

        assert!(matches!(
            service.add_document(missing_embedding).await,
            Err(DocumentError::MissingTextOrEmbedding)
        ));
        assert!(matches!(
            service.add_document(missing_text).await,
            Err(DocumentError::MissingTextOrEmbedding)
        ));
    }

    #[tokio::test]
    async fn test_add_document_upserts_with_derived_id() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo
            .expect_upsert()
            .with(eq(Document::new("hello".to_string(), vec![0.1, 0.2])))
            .times(1)
            .returning(|_| Ok(()));
        let service = DocumentService::new(mock_repo);

        let document = service
            .add_document(AddDocument {
                text: Some("hello".to_string()),
                embedding: Some(vec![0.1, 0.2]),
            })
            .await
            .unwrap();
        assert_eq!(document.id, crate::models::document_id("hello"));
    }

    #[tokio::test]
    async fn test_add_document_propagates_store_failure() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo
            .expect_upsert()
            .returning(|_| Err(StoreError::CollectionNotFound("default".to_string()).into()));
        let service = DocumentService::new(mock_repo);

        let result = service
            .add_document(AddDocument {
                text: Some("hello".to_string()),
                embedding: Some(vec![0.1]),
            })
            .await;
        assert!(matches!(
            result,
            Err(DocumentError::Store(StoreError::CollectionNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_query_defaults_top_k_to_three() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo
            .expect_query()
            .with(always(), eq(3))
            .times(1)
            .returning(|_, _| Ok(vec!["a".to_string()]));
        let service = DocumentService::new(mock_repo);

        let results = service
            .query_documents(QueryDocuments {
                vector: Some(vec![0.1]),
                top_k: None,
            })
            .await
            .unwrap();
        assert_eq!(results, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_query_requires_vector() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo.expect_query().never();
        let service = DocumentService::new(mock_repo);

        let result = service
            .query_documents(QueryDocuments {
                vector: None,
                top_k: Some(json!(1)),
            })
            .await;
        assert!(matches!(result, Err(DocumentError::MissingVector)));
    }

    #[tokio::test]
    async fn test_query_rejects_non_positive_top_k() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo.expect_query().never();
        let service = DocumentService::new(mock_repo);

        for (top_k, shown) in [
            (json!(0), "0"),
            (json!(-2), "-2"),
            (json!("0.5"), "\"0.5\""),
            (json!("many"), "\"many\""),
            (json!([3]), "[3]"),
        ] {
            let result = service
                .query_documents(QueryDocuments {
                    vector: Some(vec![0.1]),
                    top_k: Some(top_k),
                })
                .await;
            assert!(matches!(result, Err(DocumentError::InvalidTopK(ref k)) if k == shown));
        }
    }

    #[tokio::test]
    async fn test_query_coerces_numeric_top_k() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo
            .expect_query()
            .with(always(), eq(2))
            .times(3)
            .returning(|_, _| Ok(Vec::new()));
        let service = DocumentService::new(mock_repo);

        for top_k in [json!(2.0), json!("2"), json!(2.7)] {
            service
                .query_documents(QueryDocuments {
                    vector: Some(vec![0.1]),
                    top_k: Some(top_k),
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_count_documents() {
        let mut mock_repo = MockDocumentRepository::new();
        mock_repo.expect_count().returning(|| Ok(7));
        let service = DocumentService::new(mock_repo);

        assert_eq!(service.count_documents().await.unwrap(), 7);
    }
}
