use crate::store::document::DocumentStore;
use crate::store::error::StoreError;
use crate::store::types::AttackRecord;

/// Minimum trimmed query length worth a text-index lookup. Shorter queries
/// cannot produce a token (the tokenizer drops words of two characters or
/// fewer) and go straight to the substring fallback.
const TEXT_SEARCH_MIN_LEN: usize = 3;

/// Resolves a free-text query against the store.
///
/// Decision procedure, applied per call:
/// 1. Empty or whitespace-only queries short-circuit to zero results. Search
///    never treats an empty query as "match everything"; the listing endpoint
///    is the match-everything path.
/// 2. Queries long enough to tokenize try the indexed text search first. Its
///    results are returned as-is when non-empty.
/// 3. Anything else falls through to the case-insensitive substring match:
///    short queries, tokenized misses (e.g. "DLL" inside a longer word), and
///    text-strategy errors.
///
/// Both strategies honor `limit`/`offset` identically, and the returned total
/// always counts the full match set of the strategy actually used.
pub fn resolve(
    store: &DocumentStore,
    query: &str,
    limit: usize,
    offset: usize,
) -> Result<(Vec<AttackRecord>, usize), StoreError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok((Vec::new(), 0));
    }

    if trimmed.len() >= TEXT_SEARCH_MIN_LEN {
        match store.text_search(trimmed, limit, offset) {
            Ok((records, total)) if !records.is_empty() => return Ok((records, total)),
            Ok(_) => {}
            Err(err) => {
                tracing::warn!("Text search failed, falling back to substring search: {}", err);
            }
        }
    }

    store.pattern_search(trimmed, limit, offset)
}
