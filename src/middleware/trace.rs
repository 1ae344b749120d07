//! Per-request tracing.

use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Dispatches `req` through `router` inside a `request` span.
///
/// The span records the method as received, before any override; the
/// completion event carries the final status and the latency in microseconds.
pub async fn trace(router: &Router, req: Request) -> Response {
    let span = info_span!("request", method = %req.method(), path = %req.path());
    async move {
        let started = Instant::now();
        let res = router.handle(req).await;
        let latency_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        info!(status = res.status_code(), latency_us, "request completed");
        res
    }
    .instrument(span)
    .await
}
