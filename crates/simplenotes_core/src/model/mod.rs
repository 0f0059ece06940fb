//! Domain model for locally stored notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage, search and editor.
//! - Own the wire shape used when mirroring notes into the key-value store.
//!
//! # Invariants
//! - Every note is identified by a stable, opaque `NoteId`.
//! - A note never carries a blank title or `updated_at < created_at`.

pub mod note;
pub mod timestamp;
