use attack_catalog::catalog::handlers::{
    handle_dashboard, handle_get_by_id, handle_health, handle_list, handle_stats,
};
use attack_catalog::ingestion::handlers::handle_ingest;
use attack_catalog::ingestion::pipeline::IngestionConfig;
use attack_catalog::search::handlers::handle_search;
use attack_catalog::store::document::DocumentStore;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr: SocketAddr = std::env::var("API_BIND")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;
    let ingestion_config = Arc::new(IngestionConfig::from_env());

    // 1. Document store, constructed here and handed to every handler explicitly:
    let store = Arc::new(DocumentStore::new());
    if let Err(err) = store.ensure_indexes() {
        tracing::warn!("Failed to create search indexes: {}", err);
    }

    // 2. HTTP router:
    let api = Router::new()
        .route("/health", get(handle_health))
        .route("/attack-patterns", get(handle_list))
        .route("/attack-patterns/search", post(handle_search))
        .route("/attack-patterns/:pattern_id", get(handle_get_by_id))
        .route("/stats", get(handle_stats))
        .route("/dashboard-data", get(handle_dashboard))
        .route("/ingest", post(handle_ingest));

    let app = Router::new()
        .nest("/api/v1", api)
        .layer(Extension(store))
        .layer(Extension(ingestion_config));

    // 3. Start HTTP server:
    tracing::info!("Attack catalog API listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
