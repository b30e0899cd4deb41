//! Service info, status and load simulation handlers.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{
    DOCS_PATH, HEALTH_PATH, METRICS_PATH, SERVICE_DESCRIPTION, SERVICE_NAME, SERVICE_VERSION,
    STATUS_RUNNING,
};
use crate::errors::AppResult;
use crate::services::{simulate_load, LoadReport};

/// Static service metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
    pub docs_url: String,
    pub health_check: String,
    /// Omitted when metrics are disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
}

/// Runtime status snapshot
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
    #[schema(example = "running")]
    pub status: String,
    pub uptime_seconds: u64,
    /// Number of registered users
    pub total_users: usize,
    #[schema(example = "development")]
    pub environment: String,
    pub timestamp: DateTime<Utc>,
}

/// Status routes mounted under the API prefix.
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(get_status))
        .route("/simulate-load", get(simulate_load_handler))
}

/// Root endpoint with API information
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        docs_url: DOCS_PATH.to_string(),
        health_check: HEALTH_PATH.to_string(),
        metrics: state
            .config
            .metrics_enabled
            .then(|| METRICS_PATH.to_string()),
    })
}

/// Application status
#[utoipa::path(
    get,
    path = "/api/v1/status",
    tag = "Service",
    responses(
        (status = 200, description = "Status snapshot", body = StatusResponse)
    )
)]
pub async fn get_status(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    let total_users = state.user_service.count_users().await?;

    Ok(Json(StatusResponse {
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        status: STATUS_RUNNING.to_string(),
        uptime_seconds: state.health.uptime_seconds(),
        total_users,
        environment: state.config.environment.clone(),
        timestamp: Utc::now(),
    }))
}

/// Burn some CPU for autoscaling tests
#[utoipa::path(
    get,
    path = "/api/v1/simulate-load",
    tag = "Service",
    responses(
        (status = 200, description = "Load simulation result", body = LoadReport)
    )
)]
pub async fn simulate_load_handler() -> AppResult<Json<LoadReport>> {
    Ok(Json(simulate_load().await?))
}

/// Prometheus exposition
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics.render(),
    )
}
