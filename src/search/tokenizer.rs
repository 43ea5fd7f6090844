use regex::Regex;
use std::collections::HashSet;

/// Tokenizes record text for the combined index. Alphanumeric words are kept
/// so technique ids like "T1055" stay searchable; words of two characters or
/// fewer are dropped as untokenizable noise.
pub fn tokenize_text(text: &str) -> HashSet<String> {
    let re = Regex::new(r"\b[a-zA-Z0-9]+\b").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() > 2)
        .collect()
}

/// Tokenizes a user query with the same normalization as `tokenize_text`,
/// preserving token order and duplicates.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| word.len() > 2)
        .collect()
}
