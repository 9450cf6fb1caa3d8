//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - required fields missing or body is not valid JSON",
    content_type = "application/json",
    example = json!({
        "error": "vector is required"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the vector store rejected or failed the operation",
    content_type = "application/json",
    example = json!({
        "error": "Embedding dimension 4 does not match collection dimensionality 3"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
