//! Catalog Module Tests
//!
//! Validates the non-search read paths over a seeded store.
//!
//! ## Test Scopes
//! - **Listing**: Pagination passthrough and totals.
//! - **Lookup**: The distinct not-found signal.
//! - **Statistics**: Distribution counts and ordering.
//! - **Dashboard**: The capped unpaginated feed.

#[cfg(test)]
mod tests {
    use crate::catalog::service::{DASHBOARD_LIMIT, dashboard, get_by_id, list_all, stats};
    use crate::store::document::DocumentStore;
    use crate::store::error::StoreError;
    use crate::store::types::{AttackRecord, ExternalReference, KillChainPhase};

    fn record(id: &str, name: &str, platforms: &[&str], phase: &str) -> AttackRecord {
        AttackRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            detection: "NA".to_string(),
            primary_phase: phase.to_string(),
            external_id: id.to_string(),
            kill_chain_phases: vec![KillChainPhase {
                phase_name: phase.to_string(),
            }],
            external_references: vec![ExternalReference {
                source_name: Some("mitre-attack".to_string()),
                external_id: Some(id.to_string()),
                url: None,
            }],
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

    fn seeded_store() -> DocumentStore {
        let store = DocumentStore::new();
        store
            .replace_all(vec![
                record("T1001", "Data Exfiltration", &["Windows", "Linux"], "exfiltration"),
                record("T1055", "Process Injection", &["Windows"], "defense-evasion"),
                record(
                    "T1027",
                    "Obfuscated Files or Information",
                    &["Windows", "Linux", "macOS"],
                    "defense-evasion",
                ),
            ])
            .unwrap();
        store
    }

    // ============================================================
    // LISTING
    // ============================================================

    #[test]
    fn test_list_all_passes_pagination_through() {
        let store = seeded_store();

        let (page, total) = list_all(&store, 2, 1).unwrap();

        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "T1055");
        assert_eq!(page[1].id, "T1027");
    }

    // ============================================================
    // LOOKUP
    // ============================================================

    #[test]
    fn test_get_by_id_found() {
        let store = seeded_store();

        let found = get_by_id(&store, "T1027").unwrap();
        assert_eq!(found.name, "Obfuscated Files or Information");
    }

    #[test]
    fn test_get_by_id_not_found_is_distinct_and_carries_id() {
        let store = seeded_store();

        let err = get_by_id(&store, "T9999").unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(err.to_string().contains("T9999"));
    }

    // ============================================================
    // STATISTICS
    // ============================================================

    #[test]
    fn test_stats_totals_and_platform_distribution() {
        let store = seeded_store();

        let response = stats(&store).unwrap();

        assert_eq!(response.total_patterns, 3);

        let platforms: Vec<(&str, usize)> = response
            .platform_distribution
            .iter()
            .map(|g| (g.value.as_str(), g.count))
            .collect();
        assert_eq!(platforms, vec![("Windows", 3), ("Linux", 2), ("macOS", 1)]);
    }

    #[test]
    fn test_stats_phase_distribution_sorted_descending() {
        let store = seeded_store();

        let response = stats(&store).unwrap();

        assert_eq!(response.phase_distribution[0].value, "defense-evasion");
        assert_eq!(response.phase_distribution[0].count, 2);
        assert_eq!(response.phase_distribution[1].value, "exfiltration");
        assert_eq!(response.phase_distribution[1].count, 1);
    }

    #[test]
    fn test_stats_empty_store() {
        let store = DocumentStore::new();

        let response = stats(&store).unwrap();

        assert_eq!(response.total_patterns, 0);
        assert!(response.phase_distribution.is_empty());
        assert!(response.platform_distribution.is_empty());
    }

    #[test]
    fn test_group_count_wire_shape() {
        let store = seeded_store();
        let response = stats(&store).unwrap();

        let json = serde_json::to_string(&response).unwrap();

        // Aggregation buckets keep the `_id` wire name the dashboard consumes.
        assert!(json.contains(r#""_id":"Windows""#));
        assert!(json.contains(r#""total_patterns":3"#));
    }

    // ============================================================
    // DASHBOARD
    // ============================================================

    #[test]
    fn test_dashboard_returns_everything_under_cap() {
        let store = seeded_store();

        let (results, total) = dashboard(&store).unwrap();

        assert_eq!(total, 3);
        assert_eq!(results.len(), 3);
        assert!(DASHBOARD_LIMIT >= total);
    }
}
