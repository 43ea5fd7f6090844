use super::error::StoreError;
use super::types::{AttackRecord, GroupCount};
use crate::search::tokenizer::{tokenize_query, tokenize_text};

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::RwLock;

/// Field a grouped aggregate count runs over.
#[derive(Debug, Clone, Copy)]
pub enum GroupKey {
    PrimaryPhase,
    /// Multi-valued: a record contributes once per entry of its `platforms` list.
    Platform,
}

/// In-process document collection of attack records.
///
/// Records are held in insertion order so `find_all` pages are stable and
/// non-overlapping. Two index structures sit beside the collection:
/// - `token_index`: token to record ids, the combined full-text index over
///   name, description, platforms, detection, primary phase and external id.
/// - `id_index`: external id to record, for constant-time by-id lookup.
///
/// The whole collection is replaced wholesale on each ingestion run; records
/// are never mutated in place. Readers during a replace may observe a
/// transient empty state, which the concurrency contract allows.
pub struct DocumentStore {
    records: RwLock<Vec<AttackRecord>>,
    id_index: DashMap<String, AttackRecord>,
    token_index: DashMap<String, Vec<String>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            id_index: DashMap::new(),
            token_index: DashMap::new(),
        }
    }

    /// Idempotently rebuilds both indexes from the current collection.
    ///
    /// Callers treat a failure here as non-fatal: startup logs a warning and
    /// continues, because every query path degrades rather than breaks without
    /// the indexes.
    pub fn ensure_indexes(&self) -> Result<(), StoreError> {
        let guard = self.records.read().map_err(|_| StoreError::Poisoned)?;
        self.id_index.clear();
        self.token_index.clear();
        for record in guard.iter() {
            self.index_record(record);
        }
        Ok(())
    }

    /// Deletes every existing record, then inserts the given batch.
    ///
    /// Deletion fully completes before any insertion begins. Id uniqueness is
    /// enforced here: the first record with a given id wins, later duplicates
    /// are logged and skipped. Returns the number of records actually stored.
    pub fn replace_all(&self, records: Vec<AttackRecord>) -> Result<usize, StoreError> {
        let mut guard = self.records.write().map_err(|_| StoreError::Poisoned)?;
        guard.clear();
        self.id_index.clear();
        self.token_index.clear();

        let mut inserted = 0;
        for record in records {
            if self.id_index.contains_key(&record.id) {
                tracing::warn!("Skipping duplicate attack pattern id {}", record.id);
                continue;
            }
            self.index_record(&record);
            self.id_index.insert(record.id.clone(), record.clone());
            guard.push(record);
            inserted += 1;
        }

        Ok(inserted)
    }

    /// Indexed text search over the combined token index.
    ///
    /// Ordering is relevance order: records matching more query tokens rank
    /// higher, ties broken by id. `total` counts every match, independent of
    /// `limit`/`offset`.
    pub fn text_search(
        &self,
        query: &str,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<AttackRecord>, usize), StoreError> {
        let query_tokens = tokenize_query(query);

        let mut scores: HashMap<String, usize> = HashMap::new();
        for token in query_tokens.iter() {
            if let Some(ids) = self.token_index.get(token) {
                for id in ids.iter() {
                    *scores.entry(id.clone()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let total = ranked.len();
        let results = ranked
            .into_iter()
            .skip(offset)
            .take(limit)
            .filter_map(|(id, _)| self.id_index.get(&id).map(|r| r.clone()))
            .collect();

        Ok((results, total))
    }

    /// Case-insensitive substring match OR'd across the searchable fields,
    /// their nested sub-fields and the passthrough metadata fields.
    ///
    /// Guarantees that any literal fragment present in an indexed field is
    /// found, which the tokenized text index cannot promise for short or
    /// mid-word queries. Results come back in collection order.
    pub fn pattern_search(
        &self,
        query: &str,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<AttackRecord>, usize), StoreError> {
        let needle = query.to_lowercase();
        let guard = self.records.read().map_err(|_| StoreError::Poisoned)?;

        let matches: Vec<&AttackRecord> = guard
            .iter()
            .filter(|record| Self::matches_substring(record, &needle))
            .collect();

        let total = matches.len();
        let results = matches
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok((results, total))
    }

    pub fn find_all(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<AttackRecord>, usize), StoreError> {
        let guard = self.records.read().map_err(|_| StoreError::Poisoned)?;
        let total = guard.len();
        let results = guard.iter().skip(offset).take(limit).cloned().collect();
        Ok((results, total))
    }

    pub fn find_by_id(&self, id: &str) -> Result<AttackRecord, StoreError> {
        self.id_index
            .get(id)
            .map(|record| record.clone())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Grouped count over the given field, sorted count-descending with a
    /// value tie-break so the distribution order is deterministic.
    pub fn count_by_group(&self, key: GroupKey) -> Result<Vec<GroupCount>, StoreError> {
        let guard = self.records.read().map_err(|_| StoreError::Poisoned)?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in guard.iter() {
            match key {
                GroupKey::PrimaryPhase => {
                    *counts.entry(record.primary_phase.clone()).or_insert(0) += 1;
                }
                GroupKey::Platform => {
                    for platform in record.platforms.iter() {
                        *counts.entry(platform.clone()).or_insert(0) += 1;
                    }
                }
            }
        }

        let mut distribution: Vec<GroupCount> = counts
            .into_iter()
            .map(|(value, count)| GroupCount { value, count })
            .collect();
        distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

        Ok(distribution)
    }

    fn index_record(&self, record: &AttackRecord) {
        for token in tokenize_text(&Self::indexed_text(record)) {
            self.token_index.entry(token).or_default().push(record.id.clone());
        }
    }

    /// The field set covered by the combined text index.
    fn indexed_text(record: &AttackRecord) -> String {
        let mut text = String::new();
        text.push_str(&record.name);
        text.push(' ');
        text.push_str(&record.description);
        text.push(' ');
        text.push_str(&record.platforms.join(" "));
        text.push(' ');
        text.push_str(&record.detection);
        text.push(' ');
        text.push_str(&record.primary_phase);
        text.push(' ');
        text.push_str(&record.external_id);
        text
    }

    fn matches_substring(record: &AttackRecord, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(&record.name)
            || contains(&record.description)
            || record.platforms.iter().any(|p| contains(p))
            || contains(&record.detection)
            || contains(&record.primary_phase)
            || contains(&record.external_id)
            || record
                .kill_chain_phases
                .iter()
                .any(|phase| contains(&phase.phase_name))
            || record.external_references.iter().any(|reference| {
                reference.source_name.as_deref().is_some_and(contains)
                    || reference.external_id.as_deref().is_some_and(contains)
            })
            || record.domains.iter().any(|d| contains(d))
            || record.data_sources.iter().any(|d| contains(d))
            || contains(&record.version)
            || contains(&record.spec_version)
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
