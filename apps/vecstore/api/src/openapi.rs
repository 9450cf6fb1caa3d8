//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vector Store API",
        version = "0.1.0",
        description = "Stores text documents with caller-supplied embeddings and serves nearest-neighbor queries",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for the vector store API.
///
/// Document routes live at the root, so their paths are merged unprefixed.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(domain_documents::ApiDoc::openapi());
        doc
    }
}
