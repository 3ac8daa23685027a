//! `HttpTransport` over the browser `fetch()` API via gloo-net.
//!
//! Deadlines are not enforced here; wrap this in
//! `research_core::deadline::DeadlineTransport`. When that drops an
//! unfinished request, the fetch is aborted through its `AbortController`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{AbortController, AbortSignal};

use research_core::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, JSON_CONTENT_TYPE};
use research_types::TransportError;

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    fn builder(req: &HttpRequest) -> RequestBuilder {
        let builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        builder
            .header("Content-Type", JSON_CONTENT_TYPE)
            .query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let abort = AbortOnDrop::new();
        let signal = abort.signal();
        let builder = Self::builder(&req).abort_signal(signal.as_ref());

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Other(e.to_string()))?;

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read response body ({}): {}", status, e);
                String::new()
            }
        };
        abort.disarm();
        Ok(HttpResponse { status, body })
    }
}

/// Aborts the in-flight fetch unless disarmed first.
struct AbortOnDrop {
    controller: Option<AbortController>,
}

impl AbortOnDrop {
    fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    fn disarm(mut self) {
        self.controller = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            log::debug!("Aborting unfinished fetch");
            controller.abort();
        }
    }
}

/// A fetch that rejects never produced a response.
pub fn classify(e: gloo_net::Error) -> TransportError {
    match e {
        gloo_net::Error::JsError(js) => TransportError::NoResponse(js.to_string()),
        other => TransportError::Other(other.to_string()),
    }
}
