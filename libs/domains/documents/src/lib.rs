//! Documents Domain
//!
//! Stores text documents alongside caller-supplied embeddings and answers
//! nearest-neighbor queries over them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/add_doc, /query_docs, /)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required-field checks, id derivation, top_k defaulting
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + vector-store-backed implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Document, request/response DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_documents::{handlers, DocumentService, StoreDocumentRepository};
//! use vector_store::{Client, DistanceMetric};
//!
//! # async fn run() -> domain_documents::DocumentResult<()> {
//! let client = Client::new();
//! let repository =
//!     StoreDocumentRepository::connect(&client, "default", DistanceMetric::L2).await?;
//! let service = DocumentService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DocumentError, DocumentResult};
pub use handlers::ApiDoc;
pub use models::{
    AddDocument, AddDocumentResponse, DEFAULT_COLLECTION, DEFAULT_TOP_K, Document, HEALTH_MESSAGE,
    QueryDocuments, QueryDocumentsResponse, coerce_top_k, document_id,
};
pub use repository::{DocumentRepository, StoreDocumentRepository};
pub use service::DocumentService;
