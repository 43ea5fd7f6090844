//! Attack Catalog Service Library
//!
//! This library crate defines the core modules of the threat-intelligence catalog.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`ingestion`**: The data intake pipeline. Fetches attack-pattern bundles from
//!   the remote MITRE CTI repository, extracts raw records, normalizes them into the
//!   canonical shape, and bulk-loads them into the store.
//! - **`search`**: The query resolution engine. Decides between the indexed text
//!   strategy and the multi-field substring fallback, and keeps pagination and
//!   counting consistent across both.
//! - **`catalog`**: The non-search read paths: paginated listing, by-id lookup,
//!   aggregate statistics, and the dashboard feed.
//! - **`store`**: The document store. An in-process collection of attack records
//!   with a combined token index for text search and an id index for lookups.

pub mod catalog;
pub mod ingestion;
pub mod search;
pub mod store;
