mod common;

use common::{at, note};
use simplenotes_core::{EditorError, EditorMode, NoteEditor, SaveTarget};

#[test]
fn open_create_starts_with_empty_form() {
    let mut editor = NoteEditor::new();
    editor.open_edit(&note("a", "Existing", "body", at(1, 0)));
    editor.cancel();

    editor.open_create();
    assert_eq!(editor.mode(), &EditorMode::OpenCreate);
    assert_eq!(editor.title(), "");
    assert_eq!(editor.body(), "");
    assert_eq!(editor.heading(), "New note");
}

#[test]
fn open_edit_loads_note_values() {
    let target = note("a", "Existing", "body", at(1, 0));
    let mut editor = NoteEditor::new();

    editor.open_edit(&target);
    assert_eq!(editor.mode(), &EditorMode::OpenEdit(target.id.clone()));
    assert_eq!(editor.editing(), Some(&target.id));
    assert_eq!(editor.title(), "Existing");
    assert_eq!(editor.body(), "body");
    assert_eq!(editor.heading(), "Edit note");
}

#[test]
fn save_with_blank_title_stays_open_and_surfaces_error() {
    let mut editor = NoteEditor::new();
    editor.open_create();
    editor.set_title("   ");
    editor.set_body("kept");

    assert_eq!(editor.save(), Err(EditorError::TitleRequired));
    assert_eq!(editor.mode(), &EditorMode::OpenCreate);
    assert_eq!(editor.title_error(), Some(EditorError::TitleRequired));
    assert_eq!(editor.body(), "kept");
    assert_eq!(EditorError::TitleRequired.to_string(), "Title is required.");
}

#[test]
fn save_with_title_closes_and_returns_submission() {
    let target = note("a", "Existing", "body", at(1, 0));
    let mut editor = NoteEditor::new();
    editor.open_edit(&target);
    editor.set_title("Renamed");

    let submission = editor.save().unwrap();
    assert_eq!(submission.target, SaveTarget::Update(target.id));
    assert_eq!(submission.title, "Renamed");
    assert_eq!(submission.body, "body");
    assert_eq!(editor.mode(), &EditorMode::Closed);
    assert!(!editor.is_open());
}

#[test]
fn save_while_closed_is_rejected() {
    let mut editor = NoteEditor::new();
    assert_eq!(editor.save(), Err(EditorError::NotOpen));
}

#[test]
fn cancel_closes_from_any_open_state() {
    let mut editor = NoteEditor::new();
    editor.open_create();
    editor.cancel();
    assert_eq!(editor.mode(), &EditorMode::Closed);

    editor.open_edit(&note("a", "T", "", at(1, 0)));
    editor.cancel();
    assert_eq!(editor.mode(), &EditorMode::Closed);
}
