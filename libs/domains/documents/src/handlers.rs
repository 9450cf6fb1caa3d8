use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    LenientJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::DocumentResult;
use crate::models::{
    AddDocument, AddDocumentResponse, HEALTH_MESSAGE, QueryDocuments, QueryDocumentsResponse,
};
use crate::repository::DocumentRepository;
use crate::service::DocumentService;

const TAG: &str = "documents";

/// OpenAPI documentation for the Documents API
#[derive(OpenApi)]
#[openapi(
    paths(root, add_doc, query_docs),
    components(
        schemas(AddDocument, AddDocumentResponse, QueryDocuments, QueryDocumentsResponse),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Document storage and similarity search")
    )
)]
pub struct ApiDoc;

/// Create the documents router with all HTTP endpoints
pub fn router<R: DocumentRepository + 'static>(service: DocumentService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(root))
        .route("/add_doc", post(add_doc::<R>))
        .route("/query_docs", post(query_docs::<R>))
        .with_state(shared_service)
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    )
)]
async fn root() -> &'static str {
    HEALTH_MESSAGE
}

/// Store a document with its embedding
#[utoipa::path(
    post,
    path = "/add_doc",
    tag = TAG,
    request_body = AddDocument,
    responses(
        (status = 200, description = "Document stored", body = AddDocumentResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_doc<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    LenientJson(input): LenientJson<AddDocument>,
) -> DocumentResult<Json<AddDocumentResponse>> {
    service.add_document(input).await?;
    Ok(Json(AddDocumentResponse::success()))
}

/// Find the documents nearest to a query vector
#[utoipa::path(
    post,
    path = "/query_docs",
    tag = TAG,
    request_body = QueryDocuments,
    responses(
        (status = 200, description = "Nearest documents, nearest first", body = QueryDocumentsResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn query_docs<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    LenientJson(input): LenientJson<QueryDocuments>,
) -> DocumentResult<Json<QueryDocumentsResponse>> {
    let results = service.query_documents(input).await?;
    Ok(Json(QueryDocumentsResponse { results }))
}
