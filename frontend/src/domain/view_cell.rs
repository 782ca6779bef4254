//! Atomically replaced view state guarded by a fetch generation counter.
//!
//! Every fetch takes a [`FetchTicket`] before it suspends. When the fetch
//! completes, its result is only published if no newer ticket was issued in
//! the meantime, so a slow stale response can never overwrite a fresher one.
//! Readers receive an `Arc` snapshot and never observe a half-updated view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Generation number handed to one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What happened to a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result replaced the current view.
    Applied,
    /// A newer fetch started before this one finished; the result was dropped.
    Superseded,
    /// The input did not concern this screen; nothing was fetched.
    Ignored,
}

/// Lifecycle of the last operation a screen ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationPhase {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// An operation is awaiting the API.
    Loading,
    /// The last operation completed.
    Succeeded,
    /// The last operation failed.
    Failed,
}

/// Holder for one screen's immutable view value.
#[derive(Debug)]
pub struct ViewCell<T> {
    issued: AtomicU64,
    current: RwLock<Arc<T>>,
    phase: Mutex<OperationPhase>,
}

impl<T> ViewCell<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            issued: AtomicU64::new(0),
            current: RwLock::new(Arc::new(initial)),
            phase: Mutex::new(OperationPhase::Idle),
        }
    }

    /// Start a fetch: issue the next ticket and mark the cell as loading.
    pub fn begin(&self) -> FetchTicket {
        let ticket = FetchTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1);
        self.set_phase(OperationPhase::Loading);
        ticket
    }

    /// Whether `ticket` belongs to the most recently started fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Replace the view with `value` if `ticket` is still current.
    pub fn publish(&self, ticket: FetchTicket, value: T) -> FetchOutcome {
        self.replace(ticket, value, OperationPhase::Succeeded)
    }

    /// Replace the view with a failure view if `ticket` is still current,
    /// marking the phase as failed in the same step.
    pub fn publish_failed(&self, ticket: FetchTicket, value: T) -> FetchOutcome {
        self.replace(ticket, value, OperationPhase::Failed)
    }

    /// The phase is written while the view lock is held, so a reader that
    /// sees the new view never sees the previous phase.
    fn replace(&self, ticket: FetchTicket, value: T, phase: OperationPhase) -> FetchOutcome {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !self.is_current(ticket) {
            return FetchOutcome::Superseded;
        }
        *guard = Arc::new(value);
        self.set_phase(phase);
        FetchOutcome::Applied
    }

    /// Record a failed fetch. The view is left untouched; the phase only
    /// changes if `ticket` is still current.
    pub fn fail(&self, ticket: FetchTicket) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Superseded;
        }
        self.set_phase(OperationPhase::Failed);
        FetchOutcome::Applied
    }

    /// Current view snapshot.
    pub fn snapshot(&self) -> Arc<T> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Phase of the last operation.
    pub fn phase(&self) -> OperationPhase {
        match self.phase.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Overwrite the phase, for operations that do not replace the view
    /// (deletes and submissions).
    pub fn set_phase(&self, phase: OperationPhase) {
        match self.phase.lock() {
            Ok(mut guard) => *guard = phase,
            Err(poisoned) => *poisoned.into_inner() = phase,
        }
    }
}

impl<T: Default> Default for ViewCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
