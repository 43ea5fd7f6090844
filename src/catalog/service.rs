use super::types::StatsResponse;
use crate::store::document::{DocumentStore, GroupKey};
use crate::store::error::StoreError;
use crate::store::types::AttackRecord;

/// Fixed cap for the dashboard read path. Large enough to cover the full
/// enterprise technique set without being an actual unbounded read.
pub const DASHBOARD_LIMIT: usize = 10_000;

pub fn list_all(
    store: &DocumentStore,
    limit: usize,
    offset: usize,
) -> Result<(Vec<AttackRecord>, usize), StoreError> {
    store.find_all(limit, offset)
}

pub fn get_by_id(store: &DocumentStore, id: &str) -> Result<AttackRecord, StoreError> {
    store.find_by_id(id)
}

/// Total record count plus the phase and platform distributions, both sorted
/// count-descending. Platform counts treat each entry of a record's platform
/// list as its own group.
pub fn stats(store: &DocumentStore) -> Result<StatsResponse, StoreError> {
    let (_, total) = store.find_all(1, 0)?;
    let phase_distribution = store.count_by_group(GroupKey::PrimaryPhase)?;
    let platform_distribution = store.count_by_group(GroupKey::Platform)?;

    Ok(StatsResponse {
        total_patterns: total,
        phase_distribution,
        platform_distribution,
    })
}

pub fn dashboard(store: &DocumentStore) -> Result<(Vec<AttackRecord>, usize), StoreError> {
    store.find_all(DASHBOARD_LIMIT, 0)
}
