//! Research form flow: validate, submit, settle the research store.

use std::rc::Rc;

use research_core::api::ResearchApi;
use research_core::research_store::ResearchStore;

pub const EMPTY_QUESTION_NOTICE: &str = "Please enter a research question";
pub const SUCCESS_NOTICE: &str = "Research completed successfully!";
pub const COPIED_NOTICE: &str = "Copied to clipboard!";
pub const COPY_FAILED_NOTICE: &str = "Failed to copy";

/// Transient toast shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    /// Outcome of copying an answer to the clipboard. The page performs the
    /// copy; only the result comes back here.
    pub fn copy_result(copied: bool) -> Self {
        if copied {
            Notice::Success(COPIED_NOTICE.to_string())
        } else {
            Notice::Error(COPY_FAILED_NOTICE.to_string())
        }
    }
}

#[derive(Clone)]
pub struct ResearchController {
    api: Rc<ResearchApi>,
    research: ResearchStore,
}

impl ResearchController {
    pub fn new(api: Rc<ResearchApi>, research: ResearchStore) -> Self {
        Self { api, research }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.research.is_loading() && !input.trim().is_empty()
    }

    /// Run one submission to completion.
    ///
    /// Blank input is rejected before anything is sent and leaves the
    /// research state untouched. Otherwise the store goes InFlight, then
    /// settles with the result or the error message.
    pub async fn submit(&self, input: &str) -> Notice {
        let question = input.trim();
        if question.is_empty() {
            return Notice::Error(EMPTY_QUESTION_NOTICE.to_string());
        }

        self.research.set_question(question);
        self.research.start_research();
        log::info!("Submitting research question ({} chars)", question.chars().count());

        match self.api.perform_research(question, true).await {
            Ok(result) => {
                log::info!(
                    "Research {} finished: quality {} after {} iterations",
                    result.session_id,
                    result.quality_score,
                    result.iterations
                );
                self.research.set_result(result);
                Notice::Success(SUCCESS_NOTICE.to_string())
            }
            Err(e) => {
                let message = e.to_string();
                self.research.set_error(message.clone());
                Notice::Error(message)
            }
        }
    }

    pub fn reset(&self) {
        self.research.reset();
    }
}
