//! Store Data Types
//!
//! Defines the canonical attack record persisted in the document store, together
//! with its nested phase and reference entries. Serde renames keep the wire shape
//! identical to the source MITRE document fields.

use serde::{Deserialize, Serialize};

/// One stage of the attack lifecycle a technique belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KillChainPhase {
    pub phase_name: String,
}

/// A reference entry carried over from the source object.
///
/// The entry whose `source_name` matches the canonical authority name supplies
/// the record's external id during extraction; the rest are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Canonical normalized unit of threat-technique data.
///
/// Created only by the ingestion pipeline's bulk replace, never mutated in
/// place. Invariants applied at normalization time: `platforms` is never an
/// empty list (defaults to `["NA"]`), `detection` is never empty (defaults to
/// `"NA"`), and `primary_phase` is the first kill-chain phase or `"NA"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttackRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "x_mitre_platforms")]
    pub platforms: Vec<String>,
    #[serde(rename = "x_mitre_detection")]
    pub detection: String,
    #[serde(rename = "phase_name")]
    pub primary_phase: String,
    pub external_id: String,
    pub kill_chain_phases: Vec<KillChainPhase>,
    pub external_references: Vec<ExternalReference>,
    pub created_at: String,
    pub modified_at: String,
    #[serde(rename = "x_mitre_domains", default)]
    pub domains: Vec<String>,
    #[serde(rename = "x_mitre_data_sources", default)]
    pub data_sources: Vec<String>,
    #[serde(rename = "x_mitre_version", default)]
    pub version: String,
    #[serde(rename = "x_mitre_is_subtechnique", default)]
    pub is_subtechnique: bool,
    #[serde(rename = "x_mitre_deprecated", default)]
    pub deprecated: bool,
    #[serde(rename = "x_mitre_attack_spec_version", default)]
    pub spec_version: String,
}

/// One bucket of a grouped aggregate count.
///
/// The `_id` wire name mirrors the aggregation output shape the dashboard
/// already consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupCount {
    #[serde(rename = "_id")]
    pub value: String,
    pub count: usize,
}
