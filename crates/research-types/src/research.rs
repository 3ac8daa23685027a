use serde::{Deserialize, Serialize};

/// Body of `POST /api/research`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub question: String,
    pub use_cache: bool,
}

impl ResearchRequest {
    /// The question is sent as given; trimming is the caller's job.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            use_cache: true,
        }
    }

    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

/// Result of one research run, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub answer: String,
    /// 0–100
    pub quality_score: f64,
    pub iterations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_plan: Option<ResearchPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ResearchResponse {
    /// Sources, or an empty slice when the service sent none.
    pub fn sources(&self) -> &[Source] {
        self.sources.as_deref().unwrap_or(&[])
    }
}

/// The service has been seen to send the plan both as one block of text
/// and as a list of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResearchPlan {
    Text(String),
    Steps(Vec<String>),
}

impl ResearchPlan {
    /// The plan as a list. A text plan yields one step per non-empty line.
    pub fn steps(&self) -> Vec<&str> {
        match self {
            ResearchPlan::Text(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
            ResearchPlan::Steps(steps) => steps.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ResearchPlan::Text(text) => text.trim().is_empty(),
            ResearchPlan::Steps(steps) => steps.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}
