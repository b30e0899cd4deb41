//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::services::{HealthReport, LivenessReport, ReadinessReport};

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint for monitoring and load balancers
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthReport)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.health.health())
}

/// Readiness probe - 503 while any dependency check fails
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Ready to serve traffic", body = ReadinessReport),
        (status = 503, description = "A dependency check failed", body = ReadinessReport)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let report = state.health.readiness().await;

    if report.is_ready() {
        (StatusCode::OK, Json(report)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(report)).into_response()
    }
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/live",
    tag = "Health",
    responses(
        (status = 200, description = "Process is alive", body = LivenessReport)
    )
)]
pub async fn liveness_check(State(state): State<AppState>) -> Json<LivenessReport> {
    Json(state.health.liveness())
}
