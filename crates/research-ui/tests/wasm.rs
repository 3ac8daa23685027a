//! WASM-target tests for research-ui.
//!
//! Runs the submit flow and the history/progress projections under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use research_core::api::ResearchApi;
use research_core::client::ApiClient;
use research_core::ports::*;
use research_core::progress::{ProgressState, StageStatus, RESEARCH_STAGES};
use research_core::research_store::ResearchStore;
use research_core::store_bus::StoreBus;
use research_types::config::ClientConfig;
use research_types::session::Session;
use research_types::TransportError;
use research_ui::controller::*;
use research_ui::history::*;
use research_ui::views::*;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use async_trait::async_trait;

struct CannedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
}

#[async_trait(?Send)]
impl HttpTransport for CannedTransport {
    async fn send(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("exhausted".to_string())))
    }
}

fn controller(replies: Vec<Result<HttpResponse, TransportError>>) -> (ResearchController, ResearchStore) {
    let transport = Rc::new(CannedTransport { replies: RefCell::new(replies.into()) });
    let config = ClientConfig::default().with_base_url("http://api.test");
    let api = Rc::new(ResearchApi::new(ApiClient::new(config, transport)));
    let store = ResearchStore::new(StoreBus::new());
    (ResearchController::new(api, store.clone()), store)
}

fn session(id: &str, question: &str, answer: &str) -> Session {
    Session {
        session_id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        quality_score: 72.0,
        iterations: 1,
        research_plan: None,
        sources: None,
        created_at: "2025-03-04T14:05:00".to_string(),
        completed_at: None,
    }
}

#[wasm_bindgen_test]
async fn submit_success_settles_store() {
    let body = r#"{"answer":"Qubits.","quality_score":85,"iterations":3,"session_id":"abc123"}"#;
    let (controller, store) = controller(vec![Ok(HttpResponse { status: 200, body: body.to_string() })]);

    let notice = controller.submit("  What is quantum computing?  ").await;
    assert_eq!(notice, Notice::Success(SUCCESS_NOTICE.to_string()));

    let state = store.snapshot();
    assert_eq!(state.current_question, "What is quantum computing?");
    assert_eq!(state.result().map(|r| r.session_id.as_str()), Some("abc123"));
}

#[wasm_bindgen_test]
async fn submit_http_error_becomes_notice() {
    let (controller, store) = controller(vec![Ok(HttpResponse { status: 403, body: String::new() })]);
    let notice = controller.submit("q").await;
    assert!(notice.is_error());
    assert_eq!(notice.text(), "Access forbidden.");
    assert_eq!(store.snapshot().error(), Some("Access forbidden."));
}

#[wasm_bindgen_test]
async fn submit_blank_sends_nothing() {
    let (controller, store) = controller(vec![]);
    let notice = controller.submit("   ").await;
    assert_eq!(notice.text(), EMPTY_QUESTION_NOTICE);
    assert!(!store.is_loading());
    assert!(store.snapshot().result().is_none());
}

#[wasm_bindgen_test]
fn history_filter_matches_answer_text() {
    let sessions = vec![
        session("a", "Quantum basics", "Superposition."),
        session("b", "Roman roads", "Built for legions."),
    ];
    let hits = filter_sessions(&sessions, "LEGION");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].session_id, "b");
    assert_eq!(empty_state_message("zzz"), NO_MATCHES_MESSAGE);
}

#[wasm_bindgen_test]
fn progress_view_marks_current_stage() {
    let state = ProgressState { is_active: true, current: 1, completed: 1, elapsed_secs: 65 };
    let view = ProgressView::build(&RESEARCH_STAGES, &state).expect("active progress is shown");
    assert_eq!(view.elapsed, "1:05");
    assert_eq!(view.rows[0].status, StageStatus::Completed);
    assert_eq!(view.rows[1].status, StageStatus::Current);
    assert_eq!(view.rows[2].status, StageStatus::Pending);
}
