//! Substring search over the in-memory note collection.
//!
//! # Invariants
//! - Matching is case-insensitive over title and body.
//! - Results are ordered by `updated_at` descending; ties keep collection
//!   order.
//! - Filtering has no side effects.

use crate::model::note::Note;

/// Normalizes raw search box text into the match needle.
///
/// Returns `None` when the query is blank, meaning "keep everything".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns the notes matching `query`, most recently updated first.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = normalize_query(query);
    let mut matched: Vec<&Note> = match needle.as_deref() {
        None => notes.iter().collect(),
        Some(needle) => notes
            .iter()
            .filter(|note| note.matches_lowercase(needle))
            .collect(),
    };
    matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    matched
}
