//! Search Data Types
//!
//! Request and response shapes for the search endpoint. The response envelope
//! is shared with the listing and dashboard endpoints, which return the same
//! `results`/`total`/`limit`/`offset` shape.

use crate::store::types::AttackRecord;
use serde::{Deserialize, Serialize};

fn default_search_limit() -> usize {
    50
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<AttackRecord>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}
