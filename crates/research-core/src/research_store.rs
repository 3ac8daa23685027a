//! Lifecycle of the current research request.
//!
//! Every operation replaces the whole state synchronously and then emits
//! [`StoreEvent::ResearchChanged`]. The submit → await → settle sequence is
//! driven by the caller, not by the store.

use std::cell::RefCell;
use std::rc::Rc;

use research_types::research::ResearchResponse;
use crate::store_bus::{StoreBus, StoreEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum ResearchPhase {
    /// Nothing submitted yet, or reset.
    Idle,
    /// A request is outstanding.
    InFlight,
    Succeeded(ResearchResponse),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchState {
    pub current_question: String,
    pub phase: ResearchPhase,
}

impl ResearchState {
    pub fn new() -> Self {
        Self {
            current_question: String::new(),
            phase: ResearchPhase::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ResearchPhase::InFlight)
    }

    pub fn result(&self) -> Option<&ResearchResponse> {
        match &self.phase {
            ResearchPhase::Succeeded(r) => Some(r),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ResearchPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl Default for ResearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the research state — clone-cheap via Rc.
#[derive(Clone)]
pub struct ResearchStore {
    state: Rc<RefCell<ResearchState>>,
    bus: StoreBus,
}

impl ResearchStore {
    pub fn new(bus: StoreBus) -> Self {
        Self {
            state: Rc::new(RefCell::new(ResearchState::new())),
            bus,
        }
    }

    pub fn snapshot(&self) -> ResearchState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn set_question(&self, question: impl Into<String>) {
        let question = question.into();
        self.update(|s| s.current_question = question);
    }

    /// Enter `InFlight`, dropping any previous result or error. Calling it
    /// again while in flight just restarts the visible state; the earlier
    /// request is not cancelled.
    pub fn start_research(&self) {
        self.update(|s| s.phase = ResearchPhase::InFlight);
    }

    pub fn set_result(&self, result: ResearchResponse) {
        self.update(|s| s.phase = ResearchPhase::Succeeded(result));
    }

    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.update(|s| s.phase = ResearchPhase::Failed(message));
    }

    pub fn reset(&self) {
        self.update(|s| *s = ResearchState::new());
    }

    fn update(&self, f: impl FnOnce(&mut ResearchState)) {
        f(&mut self.state.borrow_mut());
        self.bus.emit(StoreEvent::ResearchChanged);
    }
}
