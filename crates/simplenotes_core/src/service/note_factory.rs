//! Note record construction.
//!
//! # Responsibility
//! - Create fresh notes with generated ids and timestamps.
//! - Produce updated copies of existing notes without mutating them.
//!
//! # Invariants
//! - `create` sets `created_at == updated_at`.
//! - `update` preserves `id` and `created_at`; `updated_at` never moves
//!   backwards, even when the clock does.

use crate::model::note::{Note, NoteId};
use chrono::{DateTime, SubsecRound, Utc};

/// Time source for note timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock truncated to millisecond precision, matching the stored
/// timestamp resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Builds note values from editor input.
#[derive(Debug, Clone, Default)]
pub struct NoteFactory<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> NoteFactory<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Current time at the stored timestamp resolution, so in-memory notes
    /// equal what a later load returns.
    fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }

    /// Creates a new note with a fresh id. The title is trimmed; the body is
    /// kept as entered.
    pub fn create(&self, title: &str, body: &str) -> Note {
        let now = self.now();
        Note {
            id: NoteId::generate(),
            title: title.trim().to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns an updated copy of `existing` with new title/body.
    pub fn update(&self, existing: &Note, title: &str, body: &str) -> Note {
        let now = self.now().max(existing.updated_at);
        Note {
            title: title.trim().to_string(),
            body: body.to_string(),
            updated_at: now,
            ..existing.clone()
        }
    }
}
