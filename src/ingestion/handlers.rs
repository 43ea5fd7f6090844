use super::pipeline::{self, IngestionConfig};
use super::types::IngestResponse;
use crate::store::document::DocumentStore;

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_ingest(
    Extension(store): Extension<Arc<DocumentStore>>,
    Extension(config): Extension<Arc<IngestionConfig>>,
) -> (StatusCode, Json<IngestResponse>) {
    match pipeline::ingest(&store, &config).await {
        Ok(inserted) => {
            let status = if inserted == 0 {
                "no_patterns_ingested"
            } else {
                "ingested"
            };
            (
                StatusCode::OK,
                Json(IngestResponse {
                    status: status.to_string(),
                    inserted,
                }),
            )
        }
        Err(err) => {
            tracing::error!("Data ingestion failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IngestResponse {
                    status: "ingestion_failed".to_string(),
                    inserted: 0,
                }),
            )
        }
    }
}
