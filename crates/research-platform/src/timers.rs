//! `TimerPort` over gloo-timers futures.
//!
//! Each timer is a task on the browser event loop wrapped in `Abortable`.
//! Cancelling the handle aborts the task, so a callback can never run
//! after its handle is gone.

use futures::future::{self, AbortHandle, Abortable};
use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use wasm_bindgen_futures::spawn_local;

use research_core::ports::{TimerHandle, TimerPort};

#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTimers;

impl GlooTimers {
    pub fn new() -> Self {
        Self
    }
}

impl TimerPort for GlooTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let (abort, registration) = AbortHandle::new_pair();
        let task = Abortable::new(
            async move {
                TimeoutFuture::new(delay_ms).await;
                callback();
            },
            registration,
        );
        spawn_local(async move {
            let _ = task.await;
        });
        TimerHandle::new(move || abort.abort())
    }

    fn set_interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> TimerHandle {
        let (abort, registration) = AbortHandle::new_pair();
        let ticks = Abortable::new(IntervalStream::new(period_ms), registration);
        spawn_local(async move {
            ticks
                .for_each(|()| {
                    callback();
                    future::ready(())
                })
                .await;
        });
        TimerHandle::new(move || abort.abort())
    }
}
