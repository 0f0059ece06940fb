//! Note domain model.
//!
//! # Responsibility
//! - Define the note record and its opaque identifier.
//! - Validate record invariants on construction paths and on decode.
//!
//! # Invariants
//! - `id` is non-blank and never changes after creation.
//! - `title` is non-blank after trimming.
//! - `updated_at` is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable, opaque note identifier.
///
/// Fresh ids are random UUIDs, but any non-blank string read back from
/// storage is accepted so older records keep their identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a collision-resistant identifier (random UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier, rejecting blank values.
    pub fn parse(value: impl Into<String>) -> Result<Self, NoteValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(NoteValidationError::BlankId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for note invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    BlankId,
    BlankTitle,
    UpdatedBeforeCreated {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "note id must not be blank"),
            Self::BlankTitle => write!(f, "note title must not be blank"),
            Self::UpdatedBeforeCreated {
                created_at,
                updated_at,
            } => write!(
                f,
                "updatedAt ({updated_at}) must be >= createdAt ({created_at})"
            ),
        }
    }
}

impl Error for NoteValidationError {}

/// Canonical note record.
///
/// Serialized with camelCase field names to match the stored JSON array
/// (`id, title, body, createdAt, updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NoteWire")]
pub struct Note {
    pub id: NoteId,
    /// Trimmed, non-blank display title.
    pub title: String,
    /// Free-form body; empty string when the user left it blank.
    pub body: String,
    #[serde(with = "crate::model::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::model::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Checks record invariants.
    ///
    /// # Errors
    /// - `BlankId` / `BlankTitle` when either is empty after trimming.
    /// - `UpdatedBeforeCreated` when timestamps are reversed.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(NoteValidationError::BlankId);
        }
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::BlankTitle);
        }
        if self.updated_at < self.created_at {
            return Err(NoteValidationError::UpdatedBeforeCreated {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }

    /// Returns whether the note was edited after creation.
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Case-insensitive substring match over title and body.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

/// Decode-side shape; converted through `Note::validate`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteWire {
    id: NoteId,
    title: String,
    #[serde(default)]
    body: String,
    #[serde(with = "crate::model::timestamp")]
    created_at: DateTime<Utc>,
    #[serde(with = "crate::model::timestamp")]
    updated_at: DateTime<Utc>,
}

impl TryFrom<NoteWire> for Note {
    type Error = NoteValidationError;

    fn try_from(value: NoteWire) -> Result<Self, Self::Error> {
        let note = Note {
            id: value.id,
            title: value.title.trim().to_string(),
            body: value.body,
            created_at: value.created_at,
            updated_at: value.updated_at,
        };
        note.validate()?;
        Ok(note)
    }
}
