//! Notes session: the single owner of in-memory notes state.
//!
//! # Responsibility
//! - Hold the note collection, active query and editor for one run.
//! - Apply editor submissions and confirmed deletions.
//! - Mirror the collection to storage after every mutation.
//!
//! # Invariants
//! - Only this type mutates the note collection.
//! - `persist` runs once per mutation; storage failures are logged and
//!   never propagated to the caller.
//! - Deletion requires a `DeleteConfirmation` issued for the same note.

use crate::editor::{EditorError, NoteEditor, SaveTarget};
use crate::model::note::{Note, NoteId};
use crate::repo::kv_store::KeyValueStore;
use crate::repo::note_store::NoteStore;
use crate::search::filter::{filter_notes, normalize_query};
use crate::service::note_factory::{Clock, NoteFactory, SystemClock};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Editor rejected the action (e.g. blank title).
    Editor(EditorError),
    /// Target note does not exist in the collection.
    NoteNotFound(NoteId),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editor(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Editor(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<EditorError> for SessionError {
    fn from(value: EditorError) -> Self {
        Self::Editor(value)
    }
}

/// Proof that the user was asked before deleting a note.
///
/// Dropping it without calling [`NotesSession::confirm_delete`] cancels the
/// deletion.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "deletion only happens once the confirmation is passed to confirm_delete"]
pub struct DeleteConfirmation {
    note_id: NoteId,
    prompt: String,
}

impl DeleteConfirmation {
    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    /// Question to show the user.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Summary line for the list toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarSummary {
    pub visible_count: usize,
    /// `"1 note"` or `"<n> notes"`.
    pub count_label: String,
    /// Trimmed active query; `None` when no filter is applied.
    pub filter: Option<String>,
}

/// Owned notes state for one run.
pub struct NotesSession<S: KeyValueStore, C: Clock = SystemClock> {
    store: NoteStore<S>,
    factory: NoteFactory<C>,
    notes: Vec<Note>,
    query: String,
    editor: NoteEditor,
}

impl<S: KeyValueStore> NotesSession<S, SystemClock> {
    /// Opens a session on the wall clock.
    pub fn open(store: NoteStore<S>) -> Self {
        Self::open_with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> NotesSession<S, C> {
    /// Opens a session, loading the stored collection.
    pub fn open_with_clock(store: NoteStore<S>, clock: C) -> Self {
        let notes = store.load();
        info!(
            "event=session_open module=session status=ok count={}",
            notes.len()
        );
        Self {
            store,
            factory: NoteFactory::new(clock),
            notes,
            query: String::new(),
            editor: NoteEditor::new(),
        }
    }

    /// Full collection in storage order (newest creations first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Notes matching the active query, most recently updated first.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.query)
    }

    pub fn toolbar(&self) -> ToolbarSummary {
        let visible_count = self.visible_notes().len();
        let noun = if visible_count == 1 { "note" } else { "notes" };
        ToolbarSummary {
            visible_count,
            count_label: format!("{visible_count} {noun}"),
            filter: normalize_query(&self.query).map(|_| self.query.trim().to_string()),
        }
    }

    pub fn editor(&self) -> &NoteEditor {
        &self.editor
    }

    /// Mutable editor access for form input (title/body/blur).
    pub fn editor_mut(&mut self) -> &mut NoteEditor {
        &mut self.editor
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Opens the editor on an existing note.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is not in the collection.
    pub fn open_edit(&mut self, id: &NoteId) -> Result<(), SessionError> {
        let note = self
            .notes
            .iter()
            .find(|note| &note.id == id)
            .ok_or_else(|| SessionError::NoteNotFound(id.clone()))?;
        self.editor.open_edit(note);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Saves the editor form as a new or updated note.
    ///
    /// # Errors
    /// - `Editor(TitleRequired)` when the title is blank; the editor stays
    ///   open and nothing is persisted.
    /// - `Editor(NotOpen)` when the editor is closed.
    /// - `NoteNotFound` when the note under edit was removed meanwhile.
    pub fn save_editor(&mut self) -> Result<Note, SessionError> {
        let submission = self.editor.save()?;
        let saved = match submission.target {
            SaveTarget::Create => {
                let note = self.factory.create(&submission.title, &submission.body);
                self.notes.insert(0, note.clone());
                info!("event=note_create module=session status=ok");
                note
            }
            SaveTarget::Update(id) => {
                let slot = self
                    .notes
                    .iter_mut()
                    .find(|note| note.id == id)
                    .ok_or_else(|| SessionError::NoteNotFound(id.clone()))?;
                let note = self
                    .factory
                    .update(slot, &submission.title, &submission.body);
                *slot = note.clone();
                info!("event=note_update module=session status=ok");
                note
            }
        };
        self.persist();
        Ok(saved)
    }

    /// Asks for confirmation before deleting `id`.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is not in the collection.
    pub fn request_delete(&self, id: &NoteId) -> Result<DeleteConfirmation, SessionError> {
        let note = self
            .find(id)
            .ok_or_else(|| SessionError::NoteNotFound(id.clone()))?;
        Ok(DeleteConfirmation {
            note_id: note.id.clone(),
            prompt: format!("Delete \"{}\"? This cannot be undone.", note.title),
        })
    }

    /// Deletes the confirmed note and returns it.
    ///
    /// Closes the editor when it was editing the deleted note.
    ///
    /// # Errors
    /// - `NoteNotFound` when the note vanished after confirmation was issued.
    pub fn confirm_delete(&mut self, confirmation: DeleteConfirmation) -> Result<Note, SessionError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == confirmation.note_id)
            .ok_or_else(|| SessionError::NoteNotFound(confirmation.note_id.clone()))?;
        let removed = self.notes.remove(index);
        if self.editor.editing() == Some(&removed.id) {
            self.editor.cancel();
        }
        info!("event=note_delete module=session status=ok");
        self.persist();
        Ok(removed)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.notes) {
            warn!(
                "event=notes_save module=session status=error error_code=store_write_failed count={} error={}",
                self.notes.len(),
                err
            );
        }
    }
}
