use super::types::{RawAttackPattern, SourceBundle, SourceObject};
use crate::store::types::{AttackRecord, ExternalReference, KillChainPhase};

use anyhow::{Result, bail};

/// The fixed source label identifying the authoritative reference entry,
/// whose external id becomes the record's id.
pub const AUTHORITY_SOURCE: &str = "mitre-attack";

const ATTACK_PATTERN_TYPE: &str = "attack-pattern";
const MISSING: &str = "N/A";

/// Selects the attack-pattern objects out of a bundle and extracts a raw
/// record from each.
pub fn extract_patterns(bundle: &SourceBundle) -> Vec<RawAttackPattern> {
    bundle
        .objects
        .iter()
        .filter(|object| object.object_type == ATTACK_PATTERN_TYPE)
        .map(extract_pattern)
        .collect()
}

fn extract_pattern(object: &SourceObject) -> RawAttackPattern {
    let external_id = object
        .external_references
        .iter()
        .find(|reference| reference.source_name.as_deref() == Some(AUTHORITY_SOURCE))
        .and_then(|reference| reference.external_id.clone())
        .unwrap_or_else(|| MISSING.to_string());

    RawAttackPattern {
        id: external_id,
        name: object.name.clone().unwrap_or_else(|| MISSING.to_string()),
        description: object
            .description
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
        // Passed through unmodified; the empty-list default belongs to process_record.
        platforms: object.x_mitre_platforms.clone(),
        detection: object
            .x_mitre_detection
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
        kill_chain_phases: object
            .kill_chain_phases
            .iter()
            .map(|phase| phase.phase_name.clone().unwrap_or_else(|| MISSING.to_string()))
            .collect(),
        external_references: object
            .external_references
            .iter()
            .map(|reference| ExternalReference {
                source_name: reference.source_name.clone(),
                external_id: reference.external_id.clone(),
                url: reference.url.clone(),
            })
            .collect(),
        created_at: object.created.clone().unwrap_or_else(|| MISSING.to_string()),
        modified_at: object
            .modified
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
        domains: object.x_mitre_domains.clone(),
        data_sources: object.x_mitre_data_sources.clone(),
        version: object
            .x_mitre_version
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
        is_subtechnique: object.x_mitre_is_subtechnique,
        deprecated: object.x_mitre_deprecated,
        spec_version: object
            .x_mitre_attack_spec_version
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
    }
}

/// Pure normalization map from a raw extracted record to the canonical one.
///
/// Applies the stored-record invariants: empty platform lists become `["NA"]`,
/// an empty detection field becomes `"NA"`, and the primary phase is the first
/// kill-chain phase or `"NA"`. Fails only when the raw record carries no
/// usable identifier; such a record could never be found again by id.
pub fn process_record(raw: RawAttackPattern) -> Result<AttackRecord> {
    if raw.id.trim().is_empty() {
        bail!("raw attack pattern {:?} has no usable identifier", raw.name);
    }

    let platforms = if raw.platforms.is_empty() {
        vec!["NA".to_string()]
    } else {
        raw.platforms
    };

    let detection = if raw.detection.is_empty() {
        "NA".to_string()
    } else {
        raw.detection
    };

    let primary_phase = raw
        .kill_chain_phases
        .first()
        .cloned()
        .unwrap_or_else(|| "NA".to_string());

    Ok(AttackRecord {
        external_id: raw.id.clone(),
        id: raw.id,
        name: raw.name,
        description: raw.description,
        platforms,
        detection,
        primary_phase,
        kill_chain_phases: raw
            .kill_chain_phases
            .into_iter()
            .map(|phase_name| KillChainPhase { phase_name })
            .collect(),
        external_references: raw.external_references,
        created_at: raw.created_at,
        modified_at: raw.modified_at,
        domains: raw.domains,
        data_sources: raw.data_sources,
        version: raw.version,
        is_subtechnique: raw.is_subtechnique,
        deprecated: raw.deprecated,
        spec_version: raw.spec_version,
    })
}

/// Built-in fallback batch used when the remote listing cannot be fetched at
/// all, so downstream consumers always have something to run against.
pub fn sample_patterns() -> Vec<RawAttackPattern> {
    vec![RawAttackPattern {
        id: "T1001".to_string(),
        name: "Data Exfiltration".to_string(),
        description: "Adversaries may steal data from compromised systems".to_string(),
        platforms: vec!["Windows".to_string(), "Linux".to_string()],
        detection: "Monitor network traffic for unusual data transfers".to_string(),
        kill_chain_phases: vec!["Exfiltration".to_string()],
        external_references: vec![ExternalReference {
            source_name: Some(AUTHORITY_SOURCE.to_string()),
            external_id: Some("T1001".to_string()),
            url: None,
        }],
        created_at: "2020-01-01T00:00:00.000Z".to_string(),
        modified_at: "2020-01-01T00:00:00.000Z".to_string(),
        domains: Vec::new(),
        data_sources: Vec::new(),
        version: MISSING.to_string(),
        is_subtechnique: false,
        deprecated: false,
        spec_version: MISSING.to_string(),
    }]
}
