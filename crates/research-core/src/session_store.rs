//! Session history: the last fetched list, a selection, and load/error state.
//!
//! The selection is kept as an id and resolved against `sessions` on every
//! read. After a refetch that no longer contains the id, the selection
//! reads as none; the id itself is left in place.

use std::cell::RefCell;
use std::rc::Rc;

use research_types::session::Session;
use crate::api::ResearchApi;
use crate::store_bus::{StoreBus, StoreEvent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionListState {
    pub sessions: Vec<Session>,
    pub is_loading: bool,
    pub error: Option<String>,
    selected_id: Option<String>,
}

impl SessionListState {
    pub fn selected_session(&self) -> Option<&Session> {
        let id = self.selected_id.as_deref()?;
        self.sessions.iter().find(|s| s.session_id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }
}

/// Shared handle to the session list — clone-cheap via Rc.
#[derive(Clone)]
pub struct SessionStore {
    state: Rc<RefCell<SessionListState>>,
    api: Rc<ResearchApi>,
    bus: StoreBus,
}

impl SessionStore {
    pub fn new(api: Rc<ResearchApi>, bus: StoreBus) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionListState::default())),
            api,
            bus,
        }
    }

    pub fn snapshot(&self) -> SessionListState {
        self.state.borrow().clone()
    }

    pub fn selected_session(&self) -> Option<Session> {
        self.state.borrow().selected_session().cloned()
    }

    /// Fetch the most recent sessions and replace the list wholesale.
    ///
    /// Overlapping calls are neither coalesced nor cancelled: whichever
    /// resolves last decides `sessions`, `error` and `is_loading`.
    pub async fn fetch_sessions(&self, limit: usize) {
        self.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.api.get_recent_sessions(limit).await {
            Ok(response) => {
                log::info!("Fetched {} of {} sessions", response.sessions.len(), response.total);
                self.update(|s| {
                    s.sessions = response.sessions;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                log::warn!("Session fetch failed: {}", e);
                let message = e.to_string();
                self.update(|s| {
                    s.error = Some(message);
                    s.is_loading = false;
                });
            }
        }
    }

    /// Select by exact `session_id`; an unknown id clears the selection.
    pub fn select_session(&self, id: &str) {
        self.update(|s| {
            s.selected_id = s
                .sessions
                .iter()
                .any(|session| session.session_id == id)
                .then(|| id.to_string());
        });
    }

    pub fn clear_selection(&self) {
        self.update(|s| s.selected_id = None);
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|s| s.is_loading = loading);
    }

    pub fn set_sessions(&self, sessions: Vec<Session>) {
        self.update(|s| s.sessions = sessions);
    }

    fn update(&self, f: impl FnOnce(&mut SessionListState)) {
        f(&mut self.state.borrow_mut());
        self.bus.emit(StoreEvent::SessionsChanged);
    }
}
