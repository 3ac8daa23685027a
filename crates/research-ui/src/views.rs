//! Display-ready projections of results, sessions and progress.

use research_core::progress::{ProgressStage, ProgressState, StageStatus};
use research_types::display::{
    format_elapsed, format_timestamp, quality_badge, truncate_text, QualityTier,
    CARD_TIMESTAMP_FORMAT, RESULT_TIMESTAMP_FORMAT,
};
use research_types::research::{ResearchPlan, ResearchResponse, Source};
use research_types::session::Session;

pub const CARD_PREVIEW_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub badge: String,
    pub tier: QualityTier,
    pub iterations_label: String,
    pub created: Option<String>,
    pub plan: Option<ResearchPlan>,
    pub answer: String,
    pub sources: Vec<Source>,
}

impl ResultView {
    pub fn from_response(result: &ResearchResponse) -> Self {
        Self {
            badge: quality_badge(result.quality_score),
            tier: QualityTier::from_score(result.quality_score),
            iterations_label: format!("{} iterations", result.iterations),
            created: result
                .created_at
                .as_deref()
                .map(|ts| format_timestamp(ts, RESULT_TIMESTAMP_FORMAT)),
            plan: result.research_plan.clone().filter(|p| !p.is_empty()),
            answer: result.answer.clone(),
            sources: result.sources().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionCardView {
    pub session_id: String,
    pub question: String,
    pub preview: String,
    pub score_label: String,
    pub tier: QualityTier,
    pub iterations: u32,
    pub created: String,
}

impl SessionCardView {
    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.session_id.clone(),
            question: session.question.clone(),
            preview: truncate_text(&session.answer, CARD_PREVIEW_CHARS),
            score_label: format!("{}%", session.quality_score),
            tier: QualityTier::from_score(session.quality_score),
            iterations: session.iterations,
            created: format_timestamp(&session.created_at, CARD_TIMESTAMP_FORMAT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRow {
    pub label: &'static str,
    pub description: &'static str,
    pub status: StageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub elapsed: String,
    pub rows: Vec<ProgressRow>,
}

impl ProgressView {
    /// `None` while inactive: the progress panel is hidden.
    pub fn build(stages: &[ProgressStage], state: &ProgressState) -> Option<Self> {
        if !state.is_active {
            return None;
        }
        let rows = stages
            .iter()
            .enumerate()
            .map(|(i, stage)| ProgressRow {
                label: stage.label,
                description: stage.description,
                status: state.stage_status(i),
            })
            .collect();
        Some(Self {
            elapsed: format_elapsed(state.elapsed_secs),
            rows,
        })
    }
}
