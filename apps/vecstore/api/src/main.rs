//! Vector Store API - HTTP facade over an in-memory vector collection

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_documents::{DEFAULT_COLLECTION, DocumentService, StoreDocumentRepository};
use std::time::Duration;
use tracing::info;
use vector_store::Client;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        collection = DEFAULT_COLLECTION,
        metric = %config.distance,
        "Initializing in-memory vector store"
    );

    let client = Client::new();
    let repository =
        StoreDocumentRepository::connect(&client, DEFAULT_COLLECTION, config.distance).await?;

    let state = AppState {
        config: config.clone(),
        documents: DocumentService::new(repository),
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            let collections = client.list_collections().await;
            info!(?collections, "Shutting down: releasing in-memory collections");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Vector Store API shutdown complete");
    Ok(())
}
