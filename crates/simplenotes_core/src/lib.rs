//! Core domain logic for SimpleNotes.
//! This crate owns note invariants, local persistence, search and editor state.

pub mod config;
pub mod db;
pub mod debounce;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, NotesConfig};
pub use debounce::{debounce, DebounceError, Debounced};
pub use editor::{EditorError, EditorMode, EditorSubmission, NoteEditor, SaveTarget};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, RepoError, RepoResult, SqliteKeyValueStore,
};
pub use repo::note_store::{NoteStore, DEFAULT_STORAGE_KEY};
pub use search::filter::filter_notes;
pub use search::input::{SearchInput, DEFAULT_SEARCH_DEBOUNCE};
pub use service::note_factory::{Clock, NoteFactory, SystemClock};
pub use service::session::{DeleteConfirmation, NotesSession, SessionError, ToolbarSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
