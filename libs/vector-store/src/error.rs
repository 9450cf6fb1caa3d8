use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Collection {0} does not exist")]
    CollectionNotFound(String),

    #[error("Collection {0} already exists")]
    CollectionExists(String),

    #[error("Embedding dimension {got} does not match collection dimensionality {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Embedding must not be empty")]
    EmptyEmbedding,

    #[error("Embedding contains a non-finite value at position {0}")]
    NonFiniteValue(usize),

    #[error(
        "Unequal batch lengths: {ids} ids, {embeddings} embeddings, {documents} documents"
    )]
    BatchLengthMismatch {
        ids: usize,
        embeddings: usize,
        documents: usize,
    },

    #[error("Expected ids to be unique, found duplicate id: {0}")]
    DuplicateId(String),

    #[error("Expected n_results to be a positive integer, got {0}")]
    InvalidResultCount(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;
