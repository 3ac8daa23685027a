//! Typed wrappers for the research service endpoints.

use research_types::{
    Result,
    research::{ResearchRequest, ResearchResponse},
    session::{HealthStatus, SessionDetailResponse, SessionsResponse},
};
use crate::client::ApiClient;

pub const RESEARCH_PATH: &str = "/api/research";
pub const RECENT_SESSIONS_PATH: &str = "/api/sessions/recent";
pub const SESSIONS_PATH: &str = "/api/sessions";
pub const HEALTH_PATH: &str = "/";

pub const DEFAULT_SESSION_LIMIT: usize = 10;

pub struct ResearchApi {
    client: ApiClient,
}

impl ResearchApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Submit a question. The question is sent as given: rejecting blank
    /// input is up to the caller.
    pub async fn perform_research(&self, question: &str, use_cache: bool) -> Result<ResearchResponse> {
        let request = ResearchRequest::new(question).with_cache(use_cache);
        self.client.post(RESEARCH_PATH, &request).await
    }

    pub async fn get_recent_sessions(&self, limit: usize) -> Result<SessionsResponse> {
        self.client
            .get(RECENT_SESSIONS_PATH, &[("limit", limit.to_string())])
            .await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SessionDetailResponse> {
        let path = format!("{}/{}", SESSIONS_PATH, session_id);
        self.client.get(&path, &[]).await
    }

    /// Diagnostic only; the stores never call this.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        self.client.get(HEALTH_PATH, &[]).await
    }
}
