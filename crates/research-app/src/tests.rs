#[cfg(test)]
mod tests {
    use crate::app::ResearchApp;
    use crate::bindings::{plan_json, result_json};
    use research_types::config::ClientConfig;
    use research_types::research::{ResearchPlan, ResearchResponse};
    use research_ui::controller::{Notice, COPIED_NOTICE, COPY_FAILED_NOTICE};
    use research_ui::views::ResultView;
    use serde_json::json;

    fn response(plan: Option<ResearchPlan>) -> ResearchResponse {
        ResearchResponse {
            answer: "Qubits.".to_string(),
            quality_score: 85.0,
            iterations: 3,
            research_plan: plan,
            sources: None,
            session_id: "abc123".to_string(),
            created_at: None,
        }
    }

    // ─── Snapshot JSON ───────────────────────────────────────

    #[test]
    fn test_text_plan_keeps_layout() {
        let text = "1. Define terms\n\n   - qubits\n2. Compare".to_string();
        let plan = ResearchPlan::Text(text.clone());
        assert_eq!(plan_json(Some(&plan)), json!(text));
    }

    #[test]
    fn test_step_plan_is_list() {
        let plan = ResearchPlan::Steps(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(plan_json(Some(&plan)), json!(["a", "b"]));
        assert_eq!(plan_json(None), serde_json::Value::Null);
    }

    #[test]
    fn test_result_json_fields() {
        let view = ResultView::from_response(&response(Some(ResearchPlan::Text("  keep\n  me".to_string()))));
        let value = result_json(&view);
        assert_eq!(value["badge"], "85% - High Quality");
        assert_eq!(value["tier"], "High Quality");
        assert_eq!(value["plan"], "  keep\n  me");
        assert_eq!(value["answer"], "Qubits.");
        assert_eq!(value["sources"], json!([]));
    }

    // ─── App wiring ──────────────────────────────────────────

    #[test]
    fn test_copy_reports_become_notices() {
        let mut app = ResearchApp::new(ClientConfig::default());
        assert!(app.answer_to_copy().is_none());

        app.report_copy(true);
        app.report_copy(false);
        let notices = app.ui_state_mut().take_notices();
        assert_eq!(
            notices,
            vec![
                Notice::Success(COPIED_NOTICE.to_string()),
                Notice::Error(COPY_FAILED_NOTICE.to_string()),
            ]
        );
    }

    #[test]
    fn test_frame_without_changes_is_idle() {
        let mut app = ResearchApp::new(ClientConfig::default());
        assert!(!app.frame());
        assert!(app.result_view().is_none());
        assert!(app.progress_view().is_none());
    }
}
