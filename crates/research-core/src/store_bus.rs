//! Change notifications from the stores to whoever renders them.
//!
//! Single-threaded (WASM constraint) with interior mutability via RefCell.
//! Stores emit after every state replacement. The UI takes the pending
//! events once per frame as a [`StoreChanges`] set and re-reads only the
//! stores named in it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ResearchChanged,
    SessionsChanged,
    ProgressChanged,
}

/// Which stores changed since the last frame.
///
/// A burst of events from one store (a submit emits several research
/// changes, a running simulator ticks progress every second) collapses to
/// one flag, so each store is re-read at most once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreChanges {
    research: bool,
    sessions: bool,
    progress: bool,
}

impl StoreChanges {
    pub fn record(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::ResearchChanged => self.research = true,
            StoreEvent::SessionsChanged => self.sessions = true,
            StoreEvent::ProgressChanged => self.progress = true,
        }
    }

    pub fn contains(&self, event: StoreEvent) -> bool {
        match event {
            StoreEvent::ResearchChanged => self.research,
            StoreEvent::SessionsChanged => self.sessions,
            StoreEvent::ProgressChanged => self.progress,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.research || self.sessions || self.progress)
    }
}

impl FromIterator<StoreEvent> for StoreChanges {
    fn from_iter<I: IntoIterator<Item = StoreEvent>>(events: I) -> Self {
        let mut changes = StoreChanges::default();
        for event in events {
            changes.record(event);
        }
        changes
    }
}

/// Shared bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct StoreBus {
    pending: Rc<RefCell<VecDeque<StoreEvent>>>,
}

impl StoreBus {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: StoreEvent) {
        self.pending.borrow_mut().push_back(event);
    }

    /// Every pending event in emission order, repeats included.
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.pending.borrow_mut().drain(..).collect()
    }

    /// Pending events folded into one change set. Events emitted while the
    /// caller handles the set stay queued for the next call.
    pub fn take_changes(&self) -> StoreChanges {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }
}

impl Default for StoreBus {
    fn default() -> Self {
        Self::new()
    }
}
