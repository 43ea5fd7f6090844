use super::extract::{extract_patterns, process_record, sample_patterns};
use super::types::{ListingEntry, RawAttackPattern, SourceBundle};
use crate::store::document::DocumentStore;
use crate::store::types::AttackRecord;

use anyhow::{Result, anyhow};

/// Files are processed in fixed-size batches to bound in-flight requests and
/// the memory holding extracted records.
const BATCH_SIZE: usize = 100;
const PROGRESS_INTERVAL: usize = 50;

const DEFAULT_LISTING_URL: &str =
    "https://api.github.com/repos/mitre/cti/contents/enterprise-attack/attack-pattern";

#[derive(Debug, Clone)]
pub struct IngestionConfig {
    pub listing_url: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
        }
    }
}

impl IngestionConfig {
    pub fn from_env() -> Self {
        Self {
            listing_url: std::env::var("ATTACK_LISTING_URL")
                .unwrap_or_else(|_| DEFAULT_LISTING_URL.to_string()),
        }
    }
}

/// Fetches and extracts raw attack patterns from the remote source.
///
/// A top-level listing failure is recovered by substituting the built-in
/// sample set; per-file failures are handled further down and never bubble
/// this far.
pub async fn fetch_attack_patterns(config: &IngestionConfig) -> Vec<RawAttackPattern> {
    match fetch_from_source(config).await {
        Ok(patterns) => patterns,
        Err(err) => {
            tracing::error!(
                "Failed to fetch attack patterns: {}; falling back to sample data",
                err
            );
            sample_patterns()
        }
    }
}

async fn fetch_from_source(config: &IngestionConfig) -> Result<Vec<RawAttackPattern>> {
    // GitHub rejects requests without a User-Agent.
    let client = reqwest::Client::builder()
        .user_agent(concat!("attack-catalog/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let listing: Vec<ListingEntry> = client
        .get(&config.listing_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let json_files: Vec<&ListingEntry> = listing
        .iter()
        .filter(|entry| entry.name.ends_with(".json"))
        .collect();
    let total_files = json_files.len();
    tracing::info!("Found {} JSON files to process", total_files);

    let batch_count = total_files.div_ceil(BATCH_SIZE);
    let mut patterns = Vec::new();
    let mut processed_files = 0usize;

    for (batch_index, batch) in json_files.chunks(BATCH_SIZE).enumerate() {
        tracing::info!(
            "Processing batch {}/{} ({} files)",
            batch_index + 1,
            batch_count,
            batch.len()
        );

        for entry in batch {
            match fetch_bundle(&client, entry).await {
                Ok(bundle) => patterns.extend(extract_patterns(&bundle)),
                Err(err) => {
                    tracing::warn!("Failed to process file {}: {}", entry.name, err);
                }
            }

            processed_files += 1;
            if processed_files % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Processed {}/{} files, found {} attack patterns",
                    processed_files,
                    total_files,
                    patterns.len()
                );
            }
        }
    }

    tracing::info!("Successfully fetched {} attack patterns", patterns.len());
    Ok(patterns)
}

async fn fetch_bundle(client: &reqwest::Client, entry: &ListingEntry) -> Result<SourceBundle> {
    let url = entry
        .download_url
        .as_deref()
        .ok_or_else(|| anyhow!("listing entry has no download URL"))?;

    let bundle = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(bundle)
}

/// Runs the full ingestion pipeline: fetch, normalize, commit.
///
/// Returns the number of records inserted into the store.
pub async fn ingest(store: &DocumentStore, config: &IngestionConfig) -> Result<usize> {
    let raw_patterns = fetch_attack_patterns(config).await;
    tracing::info!("Fetched {} attack patterns from source", raw_patterns.len());

    commit_patterns(store, raw_patterns)
}

/// Normalizes the raw batch and replaces the store's collection with it.
///
/// A record-level normalization failure is logged and skipped without
/// aborting the batch. An entirely empty normalized batch is NOT committed:
/// the previous collection stays intact rather than being wiped by a run in
/// which everything failed.
pub fn commit_patterns(store: &DocumentStore, raw_patterns: Vec<RawAttackPattern>) -> Result<usize> {
    let mut records: Vec<AttackRecord> = Vec::new();
    for raw in raw_patterns {
        match process_record(raw) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!("Skipping pattern due to processing error: {}", err);
            }
        }
    }

    if records.is_empty() {
        tracing::warn!("No patterns were processed successfully; keeping previous batch");
        return Ok(0);
    }

    let inserted = store.replace_all(records)?;
    tracing::info!("Inserted {} attack patterns", inserted);
    Ok(inserted)
}
