//! API routes module

pub mod health;

use axum::Router;
use domain_documents::handlers;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::router(state.documents.clone()))
        .merge(health::router(state.clone()))
}
