//! Trailing-edge debounce for input-driven updates.
//!
//! # Responsibility
//! - Coalesce rapid repeated calls into one delayed invocation.
//! - Allow discarding a pending invocation at any time.
//!
//! # Invariants
//! - Each call restarts the delay window; only the last value fires.
//! - At most one invocation is pending per `Debounced`.
//! - `cancel` and `Drop` discard a pending invocation without running it.
//! - Every `call` and `cancel` bumps a generation counter; a timer task only
//!   runs the action if its generation is still current. On a multi-thread
//!   runtime a task may already be past that check when a newer call lands;
//!   that action still completes, but a superseded value never starts.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Errors raised when constructing a debouncer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceError {
    /// No tokio runtime is available to drive the delay timer.
    NoRuntime,
}

impl Display for DebounceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuntime => write!(f, "debounce requires a running tokio runtime"),
        }
    }
}

impl Error for DebounceError {}

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Debounced wrapper around an action taking one argument.
pub struct Debounced<T: Send + 'static> {
    action: Action<T>,
    delay: Duration,
    runtime: Handle,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

/// Creates a debounced `action` on the current tokio runtime.
///
/// # Errors
/// - `DebounceError::NoRuntime` when called outside a runtime context.
pub fn debounce<T, F>(delay: Duration, action: F) -> Result<Debounced<T>, DebounceError>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    let runtime = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;
    Ok(Debounced::with_handle(runtime, delay, action))
}

impl<T: Send + 'static> Debounced<T> {
    /// Creates a debouncer whose timers run on `runtime`.
    pub fn with_handle<F>(runtime: Handle, delay: Duration, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            runtime,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Schedules `value` to be delivered after the delay, replacing any
    /// pending value.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let ticket = self.generation.load(Ordering::SeqCst);
        let generation = Arc::clone(&self.generation);
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == ticket {
                action(value);
            }
        }));
    }

    /// Discards the pending invocation, if any.
    ///
    /// Returns `true` when an invocation was actually discarded.
    pub fn cancel(&mut self) -> bool {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Returns whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T: Send + 'static> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
