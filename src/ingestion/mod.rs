//! Ingestion Pipeline Module
//!
//! Handles the acquisition, extraction, and normalization of attack patterns
//! from the remote MITRE CTI repository.
//!
//! ## Workflow
//! 1. **Listing**: Fetches the remote directory listing and filters to JSON files.
//! 2. **Extraction**: Downloads each bundle, selects attack-pattern objects, and
//!    produces typed raw records. A single file's failure is isolated and skipped.
//! 3. **Normalization**: Maps each raw record to the canonical `AttackRecord`,
//!    applying the field defaulting rules.
//! 4. **Commit**: Replaces the store's collection wholesale with the new batch.
//!
//! When the listing itself cannot be fetched, a built-in sample set stands in so
//! downstream consumers always have something to run against.

pub mod extract;
pub mod handlers;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod tests;
