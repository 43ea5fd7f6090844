//! Document Store Module
//!
//! The persistence layer for attack records.
//!
//! ## Overview
//! Implements an in-process document collection with the index structures the
//! read paths depend on: a combined token index over the searchable fields
//! (text search) and an id index (by-id lookup). Records are kept in insertion
//! order so pagination is stable across requests.
//!
//! ## Submodules
//! - **`document`**: The `DocumentStore` itself and its query operations.
//! - **`error`**: The `StoreError` taxonomy returned by every store operation.
//! - **`types`**: The canonical `AttackRecord` entity and its nested types.

pub mod document;
pub mod error;
pub mod types;
