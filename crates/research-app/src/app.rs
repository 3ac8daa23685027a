//! Main application state — owns the stores and runs the async flows.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use research_core::api::ResearchApi;
use research_core::client::ApiClient;
use research_core::deadline::DeadlineTransport;
use research_core::ports::{HttpTransport, TimerPort};
use research_core::progress::ProgressSimulator;
use research_core::research_store::ResearchStore;
use research_core::session_store::SessionStore;
use research_core::store_bus::StoreBus;
use research_platform::{FetchTransport, GlooTimers};
use research_types::config::ClientConfig;
use research_ui::controller::{Notice, ResearchController};
use research_ui::history::{history_body, HistoryBody, HistoryController};
use research_ui::state::{Stores, UiState};
use research_ui::views::{ProgressView, ResultView};

pub struct ResearchApp {
    ui_state: UiState,
    bus: StoreBus,
    stores: Stores,
    api: Rc<ResearchApi>,
    research: ResearchController,
    history: HistoryController,
    /// Notices produced by async tasks, moved into `ui_state` each frame.
    inbox: Rc<RefCell<Vec<Notice>>>,
}

impl ResearchApp {
    pub fn new(config: ClientConfig) -> Self {
        log::info!("Research service at {}", config.base_url);

        let timers: Rc<dyn TimerPort> = Rc::new(GlooTimers::new());
        let transport: Rc<dyn HttpTransport> = Rc::new(DeadlineTransport::new(
            Rc::new(FetchTransport::new()),
            timers.clone(),
        ));
        let api = Rc::new(ResearchApi::new(ApiClient::new(config, transport)));

        let bus = StoreBus::new();
        let stores = Stores {
            research: ResearchStore::new(bus.clone()),
            sessions: SessionStore::new(api.clone(), bus.clone()),
            progress: Rc::new(ProgressSimulator::new(timers, bus.clone())),
        };

        Self {
            ui_state: UiState::new(),
            research: ResearchController::new(api.clone(), stores.research.clone()),
            history: HistoryController::new(stores.sessions.clone()),
            bus,
            stores,
            api,
            inbox: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn ui_state_mut(&mut self) -> &mut UiState {
        &mut self.ui_state
    }

    /// Pull store changes and finished notices into the UI state.
    /// Returns whether a repaint is needed.
    pub fn frame(&mut self) -> bool {
        let mut changed = self.ui_state.process_events(self.bus.take_changes(), &self.stores);
        let notices: Vec<Notice> = self.inbox.borrow_mut().drain(..).collect();
        for notice in notices {
            self.ui_state.push_notice(notice);
            changed = true;
        }
        changed
    }

    pub fn can_submit(&self) -> bool {
        self.research.can_submit(&self.ui_state.question_input)
    }

    /// Submit the current form input (async, fire-and-forget).
    pub fn submit(&self) {
        let input = self.ui_state.question_input.clone();
        let research = self.research.clone();
        let inbox = self.inbox.clone();
        spawn_local(async move {
            let notice = research.submit(&input).await;
            inbox.borrow_mut().push(notice);
        });
    }

    /// Answer text for the page's copy action.
    pub fn answer_to_copy(&self) -> Option<String> {
        self.ui_state.research.result().map(|r| r.answer.clone())
    }

    pub fn report_copy(&mut self, copied: bool) {
        self.ui_state.push_notice(Notice::copy_result(copied));
    }

    pub fn reset_research(&self) {
        self.research.reset();
    }

    /// Refetch history (async). Overlapping refreshes are not cancelled.
    pub fn refresh_history(&self) {
        let history = self.history.clone();
        spawn_local(async move {
            history.refresh().await;
        });
    }

    pub fn open_session(&self, session_id: &str) {
        self.history.open(session_id);
    }

    pub fn close_session(&self) {
        self.history.close();
    }

    /// Log whether the service answers. Diagnostic only.
    pub fn check_health(&self) {
        let api = self.api.clone();
        spawn_local(async move {
            match api.check_health().await {
                Ok(health) => log::info!("Research service health: {}", health.status),
                Err(e) => log::warn!("Research service unreachable: {}", e),
            }
        });
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.ui_state.research.result().map(ResultView::from_response)
    }

    pub fn progress_view(&self) -> Option<ProgressView> {
        ProgressView::build(&self.stores.progress.stages(), &self.ui_state.progress)
    }

    pub fn history_body(&self) -> HistoryBody {
        history_body(&self.ui_state.sessions, &self.ui_state.search_query)
    }

    pub fn session_detail(&self) -> Option<ResultView> {
        self.ui_state
            .sessions
            .selected_session()
            .map(|s| ResultView::from_response(&s.to_research_response()))
    }
}
