use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;
use vector_store::StoreError;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("text and embedding are required")]
    MissingTextOrEmbedding,

    #[error("vector is required")]
    MissingVector,

    /// Holds the `top_k` value as it appeared in the request
    #[error("top_k must be a positive integer, got {0}")]
    InvalidTopK(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Message sent to the client for a store failure.
///
/// Input problems the caller can fix are reported as is. Anything else is
/// collapsed into a generic message and only the log keeps the detail.
fn store_error_message(err: &StoreError) -> String {
    match err {
        StoreError::DimensionMismatch { .. }
        | StoreError::EmptyEmbedding
        | StoreError::NonFiniteValue(_)
        | StoreError::InvalidResultCount(_)
        | StoreError::BatchLengthMismatch { .. }
        | StoreError::DuplicateId(_) => err.to_string(),
        StoreError::CollectionNotFound(_) | StoreError::CollectionExists(_) => {
            ErrorCode::VectorStoreError.default_message().to_string()
        }
    }
}

/// Convert DocumentError to AppError for standardized error responses
impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::MissingTextOrEmbedding | DocumentError::MissingVector => {
                AppError::Validation(err.to_string())
            }
            DocumentError::InvalidTopK(_) => AppError::VectorStore(err.to_string()),
            DocumentError::Store(store) => AppError::VectorStore(store_error_message(&store)),
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
