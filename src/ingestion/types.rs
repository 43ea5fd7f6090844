//! Ingestion Data Types
//!
//! Source shapes for the remote listing and bundle files, the typed raw record
//! the extraction stage produces, and the ingest endpoint's response shape.
//! Source objects are heterogeneous, so every field is defaulted at the serde
//! layer; the defaulting *rules* live in the extraction stage instead.

use crate::store::types::ExternalReference;
use serde::{Deserialize, Serialize};

/// One entry of the remote directory listing (GitHub contents API shape).
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// A source bundle file: a bag of typed objects, of which only the
/// attack-pattern ones are of interest.
#[derive(Debug, Default, Deserialize)]
pub struct SourceBundle {
    #[serde(default)]
    pub objects: Vec<SourceObject>,
}

/// One object inside a source bundle, with every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceObject {
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub x_mitre_platforms: Vec<String>,
    #[serde(default)]
    pub x_mitre_detection: Option<String>,
    #[serde(default)]
    pub kill_chain_phases: Vec<SourcePhase>,
    #[serde(default)]
    pub external_references: Vec<SourceReference>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub x_mitre_domains: Vec<String>,
    #[serde(default)]
    pub x_mitre_data_sources: Vec<String>,
    #[serde(default)]
    pub x_mitre_version: Option<String>,
    #[serde(default)]
    pub x_mitre_is_subtechnique: bool,
    #[serde(default)]
    pub x_mitre_deprecated: bool,
    #[serde(default)]
    pub x_mitre_attack_spec_version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcePhase {
    #[serde(default)]
    pub phase_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceReference {
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw extracted record, the intermediate between source objects and the
/// canonical `AttackRecord`.
///
/// Extraction fills missing strings with "N/A" and leaves `platforms` exactly
/// as the source provided it (possibly empty). The normalization step in
/// `extract::process_record` owns the `["NA"]`/"NA" defaulting and the primary
/// phase derivation, so the two stages stay independently testable.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAttackPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    pub platforms: Vec<String>,
    pub detection: String,
    pub kill_chain_phases: Vec<String>,
    pub external_references: Vec<ExternalReference>,
    pub created_at: String,
    pub modified_at: String,
    pub domains: Vec<String>,
    pub data_sources: Vec<String>,
    pub version: String,
    pub is_subtechnique: bool,
    pub deprecated: bool,
    pub spec_version: String,
}

/// Response returned to the client once an ingestion run completes.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: String,
    pub inserted: usize,
}
