//! WASM-target tests for research-platform (Node.js runtime).
//!
//! Exercises GlooTimers, alone and driving the progress simulator, under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! Real fetches need a browser global; see `tests/browser.rs`.

use wasm_bindgen_test::*;

use research_core::deadline::DeadlineTransport;
use research_core::ports::*;
use research_core::progress::{ProgressSimulator, ProgressStage};
use research_core::store_bus::StoreBus;
use research_platform::http::classify;
use research_platform::GlooTimers;
use research_types::TransportError;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;

fn short_stages() -> Vec<ProgressStage> {
    ["one", "two", "three"]
        .into_iter()
        .map(|id| ProgressStage { id, label: id, description: "", duration_ms: 20 })
        .collect()
}

// ─── GlooTimers Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn timeout_fires_once() {
    let fired = Rc::new(Cell::new(0));
    let f = fired.clone();
    let _handle = GlooTimers.set_timeout(10, Box::new(move || f.set(f.get() + 1)));
    TimeoutFuture::new(50).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn cancelled_timeout_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    let handle = GlooTimers.set_timeout(10, Box::new(move || f.set(true)));
    handle.cancel();
    TimeoutFuture::new(50).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn interval_stops_on_drop() {
    let ticks = Rc::new(Cell::new(0));
    let t = ticks.clone();
    let handle = GlooTimers.set_interval(10, Box::new(move || t.set(t.get() + 1)));
    TimeoutFuture::new(55).await;
    drop(handle);
    let seen = ticks.get();
    assert!(seen >= 2, "expected a few ticks, got {}", seen);
    TimeoutFuture::new(50).await;
    assert_eq!(ticks.get(), seen);
}

// ─── ProgressSimulator over real timers ──────────────────

#[wasm_bindgen_test]
async fn progress_advances_and_freezes() {
    let sim = ProgressSimulator::with_stages(short_stages(), Rc::new(GlooTimers), StoreBus::new());
    sim.set_active(true);
    TimeoutFuture::new(30).await;
    assert!(sim.snapshot().completed >= 1);

    sim.set_active(false);
    let frozen = sim.snapshot();
    TimeoutFuture::new(80).await;
    assert_eq!(sim.snapshot(), frozen);
}

// ─── Deadline over real timers ───────────────────────────

struct SlowTransport {
    delay_ms: u32,
}

#[async_trait(?Send)]
impl HttpTransport for SlowTransport {
    async fn send(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(HttpResponse { status: 200, body: "{}".to_string() })
    }
}

fn request(timeout_ms: u64) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: "http://api.test/".to_string(),
        query: Vec::new(),
        body: None,
        timeout_ms,
    }
}

#[wasm_bindgen_test]
async fn deadline_cuts_off_slow_request() {
    let transport = DeadlineTransport::new(Rc::new(SlowTransport { delay_ms: 200 }), Rc::new(GlooTimers));
    let result = transport.send(request(20)).await;
    assert_eq!(result, Err(TransportError::TimedOut(20)));
}

#[wasm_bindgen_test]
async fn deadline_lets_fast_request_through() {
    let transport = DeadlineTransport::new(Rc::new(SlowTransport { delay_ms: 5 }), Rc::new(GlooTimers));
    let result = transport.send(request(200)).await;
    assert_eq!(result.map(|r| r.status), Ok(200));
}

// ─── Fetch error classification ──────────────────────────

#[wasm_bindgen_test]
fn non_js_fetch_errors_are_other() {
    let err = classify(gloo_net::Error::GlooError("bad header".to_string()));
    assert_eq!(err, TransportError::Other("bad header".to_string()));
}
