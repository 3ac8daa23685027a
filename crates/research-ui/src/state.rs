//! UI-level state that drives rendering.
//! A read-only projection of the stores, refreshed each frame from the
//! StoreBus change set.

use std::rc::Rc;

use research_core::progress::{ProgressSimulator, ProgressState};
use research_core::research_store::{ResearchState, ResearchStore};
use research_core::session_store::{SessionListState, SessionStore};
use research_core::store_bus::{StoreChanges, StoreEvent};
use crate::controller::Notice;

/// The stores a frame reads from.
#[derive(Clone)]
pub struct Stores {
    pub research: ResearchStore,
    pub sessions: SessionStore,
    pub progress: Rc<ProgressSimulator>,
}

pub struct UiState {
    pub research: ResearchState,
    pub sessions: SessionListState,
    pub progress: ProgressState,
    /// Research form input
    pub question_input: String,
    /// History search box
    pub search_query: String,
    /// Toasts not yet shown
    pub notices: Vec<Notice>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            research: ResearchState::new(),
            sessions: SessionListState::default(),
            progress: ProgressState::default(),
            question_input: String::new(),
            search_query: String::new(),
            notices: Vec::new(),
        }
    }

    /// Re-read every store named in `changes`. Returns whether anything
    /// changed, i.e. whether a repaint is needed.
    ///
    /// The progress simulator follows the research loading flag, so a
    /// research change may also start or stop it. What the simulator emits
    /// while doing so is picked up on the next frame.
    pub fn process_events(&mut self, changes: StoreChanges, stores: &Stores) -> bool {
        if changes.is_empty() {
            return false;
        }
        if changes.contains(StoreEvent::ResearchChanged) {
            self.research = stores.research.snapshot();
            stores.progress.set_active(self.research.is_loading());
        }
        if changes.contains(StoreEvent::SessionsChanged) {
            self.sessions = stores.sessions.snapshot();
        }
        if changes.contains(StoreEvent::ResearchChanged) || changes.contains(StoreEvent::ProgressChanged) {
            self.progress = stores.progress.snapshot();
        }
        true
    }

    pub fn push_notice(&mut self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}", notice.text());
        }
        self.notices.push(notice);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn is_busy(&self) -> bool {
        self.research.is_loading() || self.sessions.is_loading
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
