//! Port traits — the boundary between this crate and the platform.
//!
//! Implementations live in `research-platform` (browser adapters) and in
//! the test suites (mocks). Nothing here knows about fetch or setTimeout.

use async_trait::async_trait;
use research_types::TransportError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

// ─── HTTP Port ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully resolved request. Bodies are JSON text sent with
/// [`JSON_CONTENT_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    /// Perform one request. A received response is `Ok` whatever its status;
    /// `Err` means no response arrived in time or at all.
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ─── Timer Port ──────────────────────────────────────────────

/// Scoped handle to a scheduled callback.
///
/// Cancelling or dropping the handle guarantees the callback never runs
/// again. Cancelling a timer that already fired is a no-op.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

pub trait TimerPort {
    /// Run `callback` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;

    /// Run `callback` every `period_ms` until the handle is cancelled.
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle;
}
