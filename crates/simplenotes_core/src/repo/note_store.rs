//! Note collection persistence adapter.
//!
//! # Responsibility
//! - Mirror the whole in-memory note collection under one namespaced key.
//! - Degrade missing or corrupt stored data to an empty collection.
//!
//! # Invariants
//! - `load` never fails; every failure path returns a (possibly empty) list.
//! - `save` replaces the full stored value.
//! - Stored entries are validated one by one; invalid entries are dropped
//!   without discarding their valid neighbours.

use crate::model::note::Note;
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Namespaced key the note collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "simple-notes-app:ocean-professional:notes";

/// Reads and writes the full note collection through a key-value store.
pub struct NoteStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Creates an adapter using [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Loads the stored collection.
    ///
    /// Returns an empty list when the key is absent, the value is not JSON,
    /// the JSON is not an array, or the backing store fails.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=notes_load module=storage status=empty reason=missing_key");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=storage status=error error_code=store_read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("event=notes_load module=storage status=reset reason=not_an_array");
                return Vec::new();
            }
            Err(_) => {
                warn!("event=notes_load module=storage status=reset reason=invalid_json");
                return Vec::new();
            }
        };

        let total = entries.len();
        let mut seen = HashSet::new();
        let notes: Vec<Note> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<Note>(entry).ok())
            .filter(|note| seen.insert(note.id.clone()))
            .collect();

        let dropped = total - notes.len();
        if dropped > 0 {
            warn!(
                "event=notes_load module=storage status=partial count={} dropped={}",
                notes.len(),
                dropped
            );
        } else {
            info!(
                "event=notes_load module=storage status=ok count={}",
                notes.len()
            );
        }
        notes
    }

    /// Serializes and writes the full collection, replacing the prior value.
    pub fn save(&self, notes: &[Note]) -> RepoResult<()> {
        let encoded = serde_json::to_string(notes)?;
        self.store.set(&self.key, &encoded)?;
        debug!(
            "event=notes_save module=storage status=ok count={} bytes={}",
            notes.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Removes the stored collection entirely.
    pub fn clear(&self) -> RepoResult<()> {
        self.store.remove(&self.key)
    }
}
