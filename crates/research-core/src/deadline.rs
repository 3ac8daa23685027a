//! Request deadlines over the timer port.
//!
//! [`DeadlineTransport`] wraps another transport and fails a request with
//! [`TransportError::TimedOut`] once `timeout_ms` passes. The losing request
//! future is dropped, which is how the inner transport learns to give up.

use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::{future, pin_mut, select, FutureExt};

use research_types::TransportError;
use crate::ports::{HttpRequest, HttpResponse, HttpTransport, TimerPort};

pub struct DeadlineTransport {
    inner: Rc<dyn HttpTransport>,
    timers: Rc<dyn TimerPort>,
}

impl DeadlineTransport {
    pub fn new(inner: Rc<dyn HttpTransport>, timers: Rc<dyn TimerPort>) -> Self {
        Self { inner, timers }
    }
}

#[async_trait(?Send)]
impl HttpTransport for DeadlineTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout_ms = req.timeout_ms;
        let (fire, fired) = oneshot::channel::<()>();
        let _deadline = self.timers.set_timeout(
            timeout_millis(timeout_ms),
            Box::new(move || {
                let _ = fire.send(());
            }),
        );

        // A timer port that discards the callback never expires the request.
        let expired = async move {
            if fired.await.is_err() {
                future::pending::<()>().await;
            }
        }
        .fuse();
        let request = self.inner.send(req).fuse();
        pin_mut!(request, expired);

        select! {
            result = request => result,
            () = expired => {
                log::warn!("Request abandoned after {}ms", timeout_ms);
                Err(TransportError::TimedOut(timeout_ms))
            }
        }
    }
}

/// Timer ports take `u32` delays; longer timeouts saturate.
pub fn timeout_millis(timeout_ms: u64) -> u32 {
    u32::try_from(timeout_ms).unwrap_or(u32::MAX)
}
