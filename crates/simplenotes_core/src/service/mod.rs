//! Note use-case services.
//!
//! # Responsibility
//! - Build note records (`NoteFactory`) from user input.
//! - Own the per-run notes state and coordinate editor, search and storage
//!   (`NotesSession`).
//!
//! # Invariants
//! - The session is the single writer of the in-memory note collection.
//! - Every collection mutation is mirrored to storage exactly once.

pub mod note_factory;
pub mod session;
