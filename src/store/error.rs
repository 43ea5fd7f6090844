use thiserror::Error;

/// Failure kinds surfaced by the document store.
///
/// `NotFound` is a distinct signaled condition so callers can map it to a
/// client error instead of a generic server failure. `Poisoned` covers a
/// store that is no longer usable because a writer panicked mid-update.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("attack pattern with ID {id} not found")]
    NotFound { id: String },

    #[error("document store lock poisoned")]
    Poisoned,
}
