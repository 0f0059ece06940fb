//! Search box model.
//!
//! Keeps the draft text the user is typing and forwards it to the session
//! owner through a channel once typing pauses. Clearing the box bypasses the
//! delay.

use crate::config::NotesConfig;
use crate::debounce::{debounce, DebounceError, Debounced};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Delay between the last keystroke and the forwarded query.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Search box with a debounced query feed.
pub struct SearchInput {
    draft: String,
    debounced: Debounced<String>,
    queries: UnboundedSender<String>,
}

impl SearchInput {
    /// Creates the input and the receiver the session owner drains.
    ///
    /// # Errors
    /// - `DebounceError::NoRuntime` outside a tokio runtime.
    pub fn new(delay: Duration) -> Result<(Self, UnboundedReceiver<String>), DebounceError> {
        let (queries, receiver) = mpsc::unbounded_channel();
        let forward = queries.clone();
        let debounced = debounce(delay, move |query: String| {
            // Receiver dropped means nobody is listening anymore.
            let _ = forward.send(query);
        })?;
        Ok((
            Self {
                draft: String::new(),
                debounced,
                queries,
            },
            receiver,
        ))
    }

    /// Creates the input using the configured search delay.
    pub fn from_config(
        config: &NotesConfig,
    ) -> Result<(Self, UnboundedReceiver<String>), DebounceError> {
        Self::new(config.search_debounce())
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Records a keystroke and schedules the debounced query.
    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.debounced.call(self.draft.clone());
    }

    /// Clears the box and publishes an empty query immediately.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.debounced.cancel();
        let _ = self.queries.send(String::new());
    }

    pub fn has_pending_query(&self) -> bool {
        self.debounced.is_pending()
    }
}
