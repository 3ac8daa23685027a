//! JS-facing handle. The page drives the app through these calls and
//! renders from the JSON snapshot.

use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use research_core::progress::StageStatus;
use research_types::config::ClientConfig;
use research_types::research::ResearchPlan;
use research_ui::history::HistoryBody;
use research_ui::views::{ProgressView, ResultView};

use crate::app::ResearchApp;

#[wasm_bindgen]
pub struct WebHandle {
    app: ResearchApp,
}

#[wasm_bindgen]
impl WebHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebHandle {
        let app = ResearchApp::new(ClientConfig::from_env());
        app.check_health();
        WebHandle { app }
    }

    pub fn set_question(&mut self, text: String) {
        self.app.ui_state_mut().question_input = text;
    }

    pub fn set_search_query(&mut self, query: String) {
        self.app.ui_state_mut().search_query = query;
    }

    pub fn submit(&self) {
        self.app.submit();
    }

    pub fn reset(&self) {
        self.app.reset_research();
    }

    /// Text the page should put on the clipboard, if a result is shown.
    pub fn answer_to_copy(&self) -> Option<String> {
        self.app.answer_to_copy()
    }

    /// Report how the clipboard write went; raises the matching notice.
    pub fn report_copy(&mut self, copied: bool) {
        self.app.report_copy(copied);
    }

    pub fn refresh_history(&self) {
        self.app.refresh_history();
    }

    pub fn open_session(&self, session_id: String) {
        self.app.open_session(&session_id);
    }

    pub fn close_session(&self) {
        self.app.close_session();
    }

    /// Call once per animation frame. Returns true when the page should re-render.
    pub fn frame(&mut self) -> bool {
        self.app.frame()
    }

    /// Notices since the last call, as `[{ "text", "error" }]`.
    pub fn take_notices(&mut self) -> String {
        let notices: Vec<Value> = self
            .app
            .ui_state_mut()
            .take_notices()
            .iter()
            .map(|n| json!({ "text": n.text(), "error": n.is_error() }))
            .collect();
        Value::Array(notices).to_string()
    }

    pub fn snapshot(&self) -> String {
        let ui = self.app.ui_state();
        json!({
            "busy": ui.is_busy(),
            "can_submit": self.app.can_submit(),
            "research": {
                "question": ui.research.current_question,
                "loading": ui.research.is_loading(),
                "error": ui.research.error(),
                "result": self.app.result_view().as_ref().map(result_json),
            },
            "progress": self.app.progress_view().as_ref().map(progress_json),
            "history": {
                "body": history_json(self.app.history_body()),
                "error": ui.sessions.error,
                "detail": self.app.session_detail().as_ref().map(result_json),
            },
        })
        .to_string()
    }
}

impl Default for WebHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn result_json(view: &ResultView) -> Value {
    json!({
        "badge": view.badge,
        "tier": view.tier.label(),
        "iterations": view.iterations_label,
        "created": view.created,
        "plan": plan_json(view.plan.as_ref()),
        "answer": view.answer,
        "sources": view.sources,
    })
}

/// A text plan stays one string so the page can keep its line breaks;
/// a step plan stays a list.
pub(crate) fn plan_json(plan: Option<&ResearchPlan>) -> Value {
    match plan {
        Some(ResearchPlan::Text(text)) => Value::String(text.clone()),
        Some(ResearchPlan::Steps(steps)) => json!(steps),
        None => Value::Null,
    }
}

fn progress_json(view: &ProgressView) -> Value {
    let rows: Vec<Value> = view
        .rows
        .iter()
        .map(|row| {
            json!({
                "label": row.label,
                "description": row.description,
                "status": match row.status {
                    StageStatus::Completed => "completed",
                    StageStatus::Current => "current",
                    StageStatus::Pending => "pending",
                },
            })
        })
        .collect();
    json!({ "elapsed": view.elapsed, "rows": rows })
}

pub(crate) fn history_json(body: HistoryBody) -> Value {
    match body {
        HistoryBody::Skeleton(count) => json!({ "kind": "skeleton", "count": count }),
        HistoryBody::Empty(message) => json!({ "kind": "empty", "message": message }),
        HistoryBody::Cards(cards) => {
            let cards: Vec<Value> = cards
                .iter()
                .map(|c| {
                    json!({
                        "session_id": c.session_id,
                        "question": c.question,
                        "preview": c.preview,
                        "score": c.score_label,
                        "tier": c.tier.label(),
                        "iterations": c.iterations,
                        "created": c.created,
                    })
                })
                .collect();
            json!({ "kind": "cards", "cards": cards })
        }
        HistoryBody::Nothing => json!({ "kind": "nothing" }),
    }
}
