//! History screen: refresh, search, open a session.

use research_core::session_store::{SessionListState, SessionStore};
use research_types::research::ResearchResponse;
use research_types::session::Session;
use crate::views::SessionCardView;

/// Page size used by the history screen.
pub const HISTORY_PAGE_SIZE: usize = 20;

pub const SKELETON_CARD_COUNT: usize = 6;

pub const NO_MATCHES_MESSAGE: &str = "No sessions match your search. Try a different query.";
pub const NO_HISTORY_MESSAGE: &str = "Start researching to build your history.";

#[derive(Clone)]
pub struct HistoryController {
    sessions: SessionStore,
}

impl HistoryController {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub async fn refresh(&self) {
        self.sessions.fetch_sessions(HISTORY_PAGE_SIZE).await;
    }

    pub fn open(&self, session_id: &str) {
        self.sessions.select_session(session_id);
    }

    pub fn close(&self) {
        self.sessions.clear_selection();
    }

    /// The open session shaped for the result view.
    pub fn detail(&self) -> Option<ResearchResponse> {
        self.sessions
            .selected_session()
            .map(|s| s.to_research_response())
    }
}

/// Case-insensitive substring match on question or answer.
pub fn filter_sessions<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    let needle = query.to_lowercase();
    sessions
        .iter()
        .filter(|s| {
            s.question.to_lowercase().contains(&needle) || s.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn empty_state_message(query: &str) -> &'static str {
    if query.is_empty() {
        NO_HISTORY_MESSAGE
    } else {
        NO_MATCHES_MESSAGE
    }
}

/// What the history list area shows. Errors are shown above it separately.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryBody {
    /// Loading with nothing fetched yet.
    Skeleton(usize),
    Empty(&'static str),
    Cards(Vec<SessionCardView>),
    /// Refreshing over an existing list, or an error with no matches.
    Nothing,
}

pub fn history_body(state: &SessionListState, query: &str) -> HistoryBody {
    if state.is_loading {
        return if state.sessions.is_empty() {
            HistoryBody::Skeleton(SKELETON_CARD_COUNT)
        } else {
            HistoryBody::Nothing
        };
    }

    let matches = filter_sessions(&state.sessions, query);
    if !matches.is_empty() {
        HistoryBody::Cards(matches.into_iter().map(SessionCardView::from_session).collect())
    } else if state.error.is_none() {
        HistoryBody::Empty(empty_state_message(query))
    } else {
        HistoryBody::Nothing
    }
}
