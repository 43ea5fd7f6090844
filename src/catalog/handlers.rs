use super::service;
use super::types::{ErrorResponse, HealthResponse, ListParams};
use crate::search::types::SearchResponse;
use crate::store::document::DocumentStore;
use crate::store::error::StoreError;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

const DEFAULT_PAGE_LIMIT: usize = 10;
const MAX_PAGE_LIMIT: usize = 100;

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Attack catalog API is running".to_string(),
    })
}

pub async fn handle_list(
    Query(params): Query<ListParams>,
    Extension(store): Extension<Arc<DocumentStore>>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let offset = params.offset.unwrap_or(0);

    if limit < 1 || limit > MAX_PAGE_LIMIT {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: format!("limit must be between 1 and {}", MAX_PAGE_LIMIT),
            }),
        )
            .into_response();
    }

    match service::list_all(&store, limit, offset) {
        Ok((results, total)) => (
            StatusCode::OK,
            Json(SearchResponse {
                results,
                total,
                limit,
                offset,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to list attack patterns: {}", err);
            internal_error(err).into_response()
        }
    }
}

pub async fn handle_get_by_id(
    Path(pattern_id): Path<String>,
    Extension(store): Extension<Arc<DocumentStore>>,
) -> Response {
    match service::get_by_id(&store, &pattern_id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err @ StoreError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to get attack pattern {}: {}", pattern_id, err);
            internal_error(err).into_response()
        }
    }
}

pub async fn handle_stats(Extension(store): Extension<Arc<DocumentStore>>) -> Response {
    match service::stats(&store) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => {
            tracing::error!("Failed to get stats: {}", err);
            internal_error(err).into_response()
        }
    }
}

pub async fn handle_dashboard(Extension(store): Extension<Arc<DocumentStore>>) -> Response {
    match service::dashboard(&store) {
        Ok((results, total)) => (
            StatusCode::OK,
            Json(SearchResponse {
                results,
                total,
                limit: total,
                offset: 0,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to get dashboard data: {}", err);
            internal_error(err).into_response()
        }
    }
}

fn internal_error(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}
