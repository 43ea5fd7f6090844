//! Catalog Service Module
//!
//! The non-search read paths over the attack record collection.
//!
//! ## Responsibilities
//! - **Listing**: Paginated retrieval of the full collection.
//! - **Lookup**: By-id retrieval with a distinct not-found signal.
//! - **Statistics**: Total count plus phase and platform distributions.
//! - **Dashboard**: The effectively unbounded listing the dashboard consumes.
//!
//! ## Submodules
//! - **`service`**: Thin service functions over the document store.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Request/response shapes for the catalog endpoints.

pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
