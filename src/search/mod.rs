//! Query Resolution Module
//!
//! The core component responsible for answering free-text queries over the
//! attack record collection.
//!
//! ## Overview
//! Queries arrive in varying quality and length. This module picks the right
//! strategy per call: the indexed text search (fast, relevance-ranked, but
//! blind to substrings inside longer words) or the multi-field substring
//! fallback (exhaustive, collection-ordered). The fallback also absorbs text
//! strategy failures so a degraded index never turns into a failed request.
//!
//! ## Submodules
//! - **`engine`**: The strategy selection and fallback procedure (`resolve`).
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`tokenizer`**: Text normalization shared by indexing and query parsing.
//! - **`types`**: Request/response shapes for the search endpoint.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
