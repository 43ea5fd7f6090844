use super::engine::resolve;
use super::types::{SearchRequest, SearchResponse};
use crate::catalog::types::ErrorResponse;
use crate::store::document::DocumentStore;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Extension(store): Extension<Arc<DocumentStore>>,
    Json(request): Json<SearchRequest>,
) -> Response {
    match resolve(&store, &request.query, request.limit, request.offset) {
        Ok((results, total)) => (
            StatusCode::OK,
            Json(SearchResponse {
                results,
                total,
                limit: request.limit,
                offset: request.offset,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to search attack patterns: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
