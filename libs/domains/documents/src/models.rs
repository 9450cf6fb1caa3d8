use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

/// Name of the single collection the service works against
pub const DEFAULT_COLLECTION: &str = "default";

/// Result count used when a query omits `top_k`
pub const DEFAULT_TOP_K: i64 = 3;

/// Body of `GET /`
pub const HEALTH_MESSAGE: &str = "ChromaDB API Server Running (In-Memory)";

/// Identifier for a document: lowercase hex SHA-256 of the text bytes.
///
/// Identical text always maps to the same id, so re-adding it replaces the
/// stored embedding instead of creating a second record.
pub fn document_id(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

/// A document ready to be written to the store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Document {
    pub fn new(text: String, embedding: Vec<f32>) -> Self {
        Self {
            id: document_id(&text),
            text,
            embedding,
        }
    }
}

/// Body of `POST /add_doc`.
///
/// Both fields are required; they are optional here so that a missing field
/// is reported with the endpoint's own message rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AddDocument {
    /// Document text
    #[schema(example = "hello")]
    pub text: Option<String>,
    /// Embedding of `text`, produced by the caller
    #[schema(example = json!([0.1, 0.2, 0.3]))]
    pub embedding: Option<Vec<f32>>,
}

/// Body of `POST /query_docs`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QueryDocuments {
    /// Query embedding (required)
    #[schema(example = json!([0.1, 0.2, 0.31]))]
    pub vector: Option<Vec<f32>>,
    /// Maximum number of documents to return, defaults to 3.
    ///
    /// Integral floats, numeric strings and booleans are accepted and
    /// converted with [`coerce_top_k`].
    #[schema(value_type = Option<i64>, example = 3)]
    pub top_k: Option<Value>,
}

/// Convert a JSON `top_k` to an integer.
///
/// Integers pass through, floats are truncated toward zero, strings are
/// parsed after trimming whitespace, and booleans become 0 or 1. Anything
/// else, including `"1.5"`, is `None`.
pub fn coerce_top_k(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddDocumentResponse {
    #[schema(example = "success")]
    pub status: String,
}

impl AddDocumentResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QueryDocumentsResponse {
    /// Matched document texts, nearest first
    pub results: Vec<String>,
}
