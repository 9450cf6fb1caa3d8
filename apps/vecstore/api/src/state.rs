//! Application state management

use domain_documents::{DocumentService, StoreDocumentRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub documents: DocumentService<StoreDocumentRepository>,
}
