//! Note editor state machine.
//!
//! # Responsibility
//! - Track whether the editor is closed, creating, or editing a note.
//! - Hold form fields and surface the inline title validation error.
//!
//! # Invariants
//! - Opening the editor always resets the form to the target note (or to
//!   empty fields for a new note).
//! - `save` only leaves the open state when the trimmed title is non-blank.
//! - The title error is hidden until the title was blurred or a save was
//!   attempted.

use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Editor lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Closed,
    OpenCreate,
    OpenEdit(NoteId),
}

/// Editor-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// Trimmed title is empty; the editor stays open.
    TitleRequired,
    /// `save` was called while the editor was closed.
    NotOpen,
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "Title is required."),
            Self::NotOpen => write!(f, "editor is not open"),
        }
    }
}

impl Error for EditorError {}

/// What a successful save should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(NoteId),
}

/// Validated form contents handed to the session on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSubmission {
    pub target: SaveTarget,
    /// Raw title as typed; the factory trims it.
    pub title: String,
    pub body: String,
}

/// Editor form plus mode.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    mode: EditorMode,
    title: String,
    body: String,
    touched: bool,
}

impl NoteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    /// Id of the note being edited, if any.
    pub fn editing(&self) -> Option<&NoteId> {
        match &self.mode {
            EditorMode::OpenEdit(id) => Some(id),
            _ => None,
        }
    }

    /// Heading shown above the form.
    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditorMode::OpenEdit(_) => "Edit note",
            _ => "New note",
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn open_create(&mut self) {
        self.reset_form("", "");
        self.mode = EditorMode::OpenCreate;
    }

    pub fn open_edit(&mut self, note: &Note) {
        self.reset_form(&note.title, &note.body);
        self.mode = EditorMode::OpenEdit(note.id.clone());
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Marks the title field as visited (focus left the field).
    pub fn blur_title(&mut self) {
        self.touched = true;
    }

    /// Inline title error, if it should be shown.
    pub fn title_error(&self) -> Option<EditorError> {
        if self.touched && self.title.trim().is_empty() {
            Some(EditorError::TitleRequired)
        } else {
            None
        }
    }

    /// Closes the editor, discarding form contents.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Closed;
    }

    /// Validates the form and closes the editor on success.
    ///
    /// # Errors
    /// - `NotOpen` when the editor is closed.
    /// - `TitleRequired` when the trimmed title is blank; the mode and form
    ///   are left unchanged apart from surfacing the error.
    pub fn save(&mut self) -> Result<EditorSubmission, EditorError> {
        let target = match &self.mode {
            EditorMode::Closed => return Err(EditorError::NotOpen),
            EditorMode::OpenCreate => SaveTarget::Create,
            EditorMode::OpenEdit(id) => SaveTarget::Update(id.clone()),
        };

        self.touched = true;
        if self.title.trim().is_empty() {
            return Err(EditorError::TitleRequired);
        }

        self.mode = EditorMode::Closed;
        Ok(EditorSubmission {
            target,
            title: std::mem::take(&mut self.title),
            body: std::mem::take(&mut self.body),
        })
    }

    fn reset_form(&mut self, title: &str, body: &str) {
        self.title = title.to_string();
        self.body = body.to_string();
        self.touched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorError, EditorMode, NoteEditor};

    #[test]
    fn title_error_is_hidden_until_touched() {
        let mut editor = NoteEditor::new();
        editor.open_create();
        assert_eq!(editor.title_error(), None);

        editor.blur_title();
        assert_eq!(editor.title_error(), Some(EditorError::TitleRequired));

        editor.set_title("x");
        assert_eq!(editor.title_error(), None);
    }

    #[test]
    fn reopening_clears_touched_state() {
        let mut editor = NoteEditor::new();
        editor.open_create();
        let _ = editor.save();
        assert!(editor.title_error().is_some());

        editor.cancel();
        editor.open_create();
        assert_eq!(editor.title_error(), None);
        assert_eq!(editor.mode(), &EditorMode::OpenCreate);
    }
}
