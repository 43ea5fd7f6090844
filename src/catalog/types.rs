//! Catalog Data Types
//!
//! Request parameters and response shapes for the listing, stats, health and
//! error paths. List responses reuse the search envelope from
//! `crate::search::types`.

use crate::store::types::GroupCount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_patterns: usize,
    pub phase_distribution: Vec<GroupCount>,
    pub platform_distribution: Vec<GroupCount>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Error detail envelope returned with 4xx/5xx statuses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
