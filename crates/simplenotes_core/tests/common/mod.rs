#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use simplenotes_core::{Clock, Note, NoteId};
use std::cell::Cell;

/// Manually advanced clock for deterministic timestamps.
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0).unwrap()
}

pub fn note(id: &str, title: &str, body: &str, updated: DateTime<Utc>) -> Note {
    Note {
        id: NoteId::parse(id).unwrap(),
        title: title.to_string(),
        body: body.to_string(),
        created_at: at(0, 0),
        updated_at: updated,
    }
}
