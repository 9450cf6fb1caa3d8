//! JSON extractor that ignores the request `Content-Type`.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that parses the body whatever `Content-Type` says.
///
/// Unlike `axum::Json`, a missing or non-JSON content type is not a 415.
/// Bodies that are not valid JSON for `T` are rejected with a 400
/// `{"error": "invalid JSON body: ..."}`. A body over the request size limit
/// is a 413.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::LenientJson;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Search {
///     vector: Option<Vec<f32>>,
/// }
///
/// async fn search(LenientJson(payload): LenientJson<Search>) -> String {
///     format!("{:?}", payload.vector)
/// }
/// ```
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| body_rejection(e).into_response())?;

        let data = serde_json::from_slice::<T>(&bytes)
            .map_err(|e| AppError::InvalidJson(e.to_string()).into_response())?;

        Ok(LenientJson(data))
    }
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        _ => AppError::InvalidJson(rejection.body_text()),
    }
}
