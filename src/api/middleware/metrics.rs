//! Request metrics middleware.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::METRICS_PATH;
use crate::infra::Metrics;

/// Holds one slot of the in-flight gauge; released on drop, so a request
/// future cancelled mid-flight still gives its slot back.
struct InFlight {
    metrics: Arc<Metrics>,
    method: String,
    handler: String,
}

impl InFlight {
    fn enter(metrics: Arc<Metrics>, method: String, handler: String) -> Self {
        metrics
            .requests_inprogress
            .inc(&[("method", method.as_str()), ("handler", handler.as_str())]);
        Self {
            metrics,
            method,
            handler,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.metrics.requests_inprogress.dec(&[
            ("method", self.method.as_str()),
            ("handler", self.handler.as_str()),
        ]);
    }
}

/// Record count, in-flight gauge and latency per route template.
///
/// Installed as a route layer, so only matched routes reach it; the label is
/// the template (`/api/v1/users/:id`), never the raw path.
pub async fn track_metrics(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(handler) = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
    else {
        return next.run(request).await;
    };

    if handler == METRICS_PATH {
        return next.run(request).await;
    }

    let method = request.method().to_string();
    let in_flight = InFlight::enter(state.metrics.clone(), method.clone(), handler.clone());
    let start = Instant::now();

    let response = next.run(request).await;

    let labels = [("method", method.as_str()), ("handler", handler.as_str())];
    state.metrics.request_duration.observe(&labels, start.elapsed());
    drop(in_flight);

    let status = response.status().as_u16().to_string();
    state.metrics.requests_total.inc(&[
        ("method", method.as_str()),
        ("handler", handler.as_str()),
        ("status", status.as_str()),
    ]);

    response
}
