//! Ingestion Module Tests
//!
//! Validates the extraction and normalization stages independently, plus the
//! commit policy that loads a normalized batch into the store.
//!
//! ## Test Scopes
//! - **Extraction**: Object selection, authority-reference resolution, field
//!   defaulting at the source boundary.
//! - **Normalization**: The `process_record` defaulting rules and its
//!   record-local failure mode.
//! - **Commit**: Partial-failure isolation and the empty-batch policy.

#[cfg(test)]
mod tests {
    use crate::ingestion::extract::{extract_patterns, process_record, sample_patterns};
    use crate::ingestion::pipeline::commit_patterns;
    use crate::ingestion::types::{RawAttackPattern, SourceBundle};
    use crate::store::document::DocumentStore;

    fn bundle_from_json(json: &str) -> SourceBundle {
        serde_json::from_str(json).expect("bundle JSON should parse")
    }

    fn raw_pattern(id: &str, name: &str) -> RawAttackPattern {
        RawAttackPattern {
            id: id.to_string(),
            name: name.to_string(),
            description: "N/A".to_string(),
            platforms: Vec::new(),
            detection: "N/A".to_string(),
            kill_chain_phases: Vec::new(),
            external_references: Vec::new(),
            created_at: "N/A".to_string(),
            modified_at: "N/A".to_string(),
            domains: Vec::new(),
            data_sources: Vec::new(),
            version: "N/A".to_string(),
            is_subtechnique: false,
            deprecated: false,
            spec_version: "N/A".to_string(),
        }
    }

    // ============================================================
    // EXTRACTION
    // ============================================================

    #[test]
    fn test_extract_selects_only_attack_patterns() {
        let bundle = bundle_from_json(
            r#"{
                "objects": [
                    {"type": "relationship", "name": "not interesting"},
                    {
                        "type": "attack-pattern",
                        "name": "Process Injection",
                        "description": "Adversaries may inject code into processes",
                        "external_references": [
                            {"source_name": "mitre-attack", "external_id": "T1055"}
                        ]
                    }
                ]
            }"#,
        );

        let patterns = extract_patterns(&bundle);

        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].id, "T1055");
        assert_eq!(patterns[0].name, "Process Injection");
    }

    #[test]
    fn test_extract_resolves_external_id_from_authority_reference() {
        let bundle = bundle_from_json(
            r#"{
                "objects": [{
                    "type": "attack-pattern",
                    "name": "Tagged",
                    "external_references": [
                        {"source_name": "capec", "external_id": "CAPEC-640"},
                        {"source_name": "mitre-attack", "external_id": "T1020"}
                    ]
                }]
            }"#,
        );

        let patterns = extract_patterns(&bundle);

        assert_eq!(patterns[0].id, "T1020");
        // The non-authority reference is still carried along.
        assert_eq!(patterns[0].external_references.len(), 2);
    }

    #[test]
    fn test_extract_defaults_id_when_authority_reference_missing() {
        let bundle = bundle_from_json(
            r#"{
                "objects": [{
                    "type": "attack-pattern",
                    "name": "Unreferenced",
                    "external_references": [
                        {"source_name": "capec", "external_id": "CAPEC-1"}
                    ]
                }]
            }"#,
        );

        let patterns = extract_patterns(&bundle);

        assert_eq!(patterns[0].id, "N/A");
    }

    #[test]
    fn test_extract_passes_platforms_through_unmodified() {
        let bundle = bundle_from_json(
            r#"{
                "objects": [{
                    "type": "attack-pattern",
                    "name": "No Platforms",
                    "external_references": [
                        {"source_name": "mitre-attack", "external_id": "T0001"}
                    ]
                }]
            }"#,
        );

        let patterns = extract_patterns(&bundle);

        // Still empty here; the ["NA"] default belongs to process_record.
        assert!(patterns[0].platforms.is_empty());
    }

    #[test]
    fn test_extract_reduces_phases_to_names() {
        let bundle = bundle_from_json(
            r#"{
                "objects": [{
                    "type": "attack-pattern",
                    "name": "Phased",
                    "kill_chain_phases": [
                        {"kill_chain_name": "mitre-attack", "phase_name": "execution"},
                        {"kill_chain_name": "mitre-attack", "phase_name": "persistence"}
                    ],
                    "external_references": [
                        {"source_name": "mitre-attack", "external_id": "T0002"}
                    ]
                }]
            }"#,
        );

        let patterns = extract_patterns(&bundle);

        assert_eq!(patterns[0].kill_chain_phases, vec!["execution", "persistence"]);
    }

    #[test]
    fn test_extract_defaults_missing_fields() {
        let bundle = bundle_from_json(
            r#"{
                "objects": [{
                    "type": "attack-pattern",
                    "external_references": [
                        {"source_name": "mitre-attack", "external_id": "T0003"}
                    ]
                }]
            }"#,
        );

        let patterns = extract_patterns(&bundle);

        assert_eq!(patterns[0].name, "N/A");
        assert_eq!(patterns[0].description, "N/A");
        assert_eq!(patterns[0].detection, "N/A");
        assert_eq!(patterns[0].created_at, "N/A");
        assert!(!patterns[0].is_subtechnique);
        assert!(!patterns[0].deprecated);
        assert!(patterns[0].domains.is_empty());
    }

    #[test]
    fn test_extract_empty_bundle() {
        let bundle = bundle_from_json(r#"{"objects": []}"#);
        assert!(extract_patterns(&bundle).is_empty());
    }

    // ============================================================
    // NORMALIZATION - process_record
    // ============================================================

    #[test]
    fn test_process_record_defaults_empty_platforms() {
        let raw = raw_pattern("T0001", "No Platforms");

        let record = process_record(raw).unwrap();

        assert_eq!(record.platforms, vec!["NA"]);
    }

    #[test]
    fn test_process_record_keeps_provided_platforms() {
        let mut raw = raw_pattern("T0001", "Platformed");
        raw.platforms = vec!["Windows".to_string(), "Linux".to_string()];

        let record = process_record(raw).unwrap();

        assert_eq!(record.platforms, vec!["Windows", "Linux"]);
    }

    #[test]
    fn test_process_record_primary_phase_is_first() {
        let mut raw = raw_pattern("T0001", "Phased");
        raw.kill_chain_phases = vec!["execution".to_string(), "persistence".to_string()];

        let record = process_record(raw).unwrap();

        assert_eq!(record.primary_phase, "execution");
        assert_eq!(record.kill_chain_phases.len(), 2);
        assert_eq!(record.kill_chain_phases[1].phase_name, "persistence");
    }

    #[test]
    fn test_process_record_primary_phase_defaults_without_phases() {
        let raw = raw_pattern("T0001", "Unphased");

        let record = process_record(raw).unwrap();

        assert_eq!(record.primary_phase, "NA");
        assert!(record.kill_chain_phases.is_empty());
    }

    #[test]
    fn test_process_record_defaults_empty_detection() {
        let mut raw = raw_pattern("T0001", "Undetectable");
        raw.detection = String::new();

        let record = process_record(raw).unwrap();

        assert_eq!(record.detection, "NA");
    }

    #[test]
    fn test_process_record_carries_external_id_from_raw_id() {
        let raw = raw_pattern("T1055", "Process Injection");

        let record = process_record(raw).unwrap();

        assert_eq!(record.id, "T1055");
        assert_eq!(record.external_id, "T1055");
    }

    #[test]
    fn test_process_record_rejects_missing_identifier() {
        let raw = raw_pattern("", "Anonymous");

        assert!(process_record(raw).is_err());
    }

    // ============================================================
    // FALLBACK SAMPLE SET
    // ============================================================

    #[test]
    fn test_sample_patterns_are_processable() {
        let samples = sample_patterns();

        assert!(!samples.is_empty());
        for raw in samples {
            let record = process_record(raw).unwrap();
            assert!(!record.id.is_empty());
            assert!(!record.platforms.is_empty());
        }
    }

    // ============================================================
    // COMMIT POLICY
    // ============================================================

    #[test]
    fn test_commit_skips_failed_records_without_aborting() {
        let store = DocumentStore::new();

        let inserted = commit_patterns(
            &store,
            vec![
                raw_pattern("T0001", "Good One"),
                raw_pattern("", "Bad One"),
                raw_pattern("T0002", "Good Two"),
            ],
        )
        .unwrap();

        assert_eq!(inserted, 2);
        let (_, total) = store.find_all(10, 0).unwrap();
        assert_eq!(total, 2);
        assert!(store.find_by_id("T0001").is_ok());
        assert!(store.find_by_id("T0002").is_ok());
    }

    #[test]
    fn test_commit_empty_batch_preserves_previous_data() {
        let store = DocumentStore::new();
        commit_patterns(&store, vec![raw_pattern("T0001", "Existing")]).unwrap();

        // A run in which every record failed must not wipe the store.
        let inserted = commit_patterns(&store, vec![raw_pattern("", "All Failed")]).unwrap();

        assert_eq!(inserted, 0);
        let (_, total) = store.find_all(10, 0).unwrap();
        assert_eq!(total, 1);
        assert!(store.find_by_id("T0001").is_ok());
    }
}
