use serde::{Deserialize, Serialize};
use crate::research::{ResearchPlan, ResearchResponse, Source};

/// A research session persisted by the service. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub quality_score: f64,
    pub iterations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_plan: Option<ResearchPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Session {
    /// View a stored session through the same shape as a fresh result,
    /// so the detail view can render both.
    pub fn to_research_response(&self) -> ResearchResponse {
        ResearchResponse {
            answer: self.answer.clone(),
            quality_score: self.quality_score,
            iterations: self.iterations,
            research_plan: self.research_plan.clone(),
            sources: self.sources.clone(),
            session_id: self.session_id.clone(),
            created_at: Some(self.created_at.clone()),
        }
    }
}

/// Body of `GET /api/sessions/recent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<Session>,
    pub total: usize,
}

/// Body of `GET /api/sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetailResponse {
    pub session: Session,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
