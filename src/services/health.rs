//! Process health state - uptime and probe answers.
//!
//! Three probes with orchestrator semantics:
//! - health: always healthy, reports uptime
//! - readiness: runs the registered dependency checks
//! - liveness: unconditional

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::SERVICE_VERSION;

/// A dependency that must be reachable before the process accepts traffic.
#[async_trait]
pub trait DependencyCheck: Send + Sync {
    /// Name reported when the check fails
    fn name(&self) -> &str;

    /// `Err` carries a human-readable reason
    async fn check(&self) -> Result<(), String>;
}

/// Health probe payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthReport {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = 42)]
    pub uptime_seconds: u64,
}

/// Readiness probe payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReadinessReport {
    #[schema(example = "ready")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Names of failing dependency checks (omitted when ready)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<String>,
}

impl ReadinessReport {
    pub fn is_ready(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Liveness probe payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LivenessReport {
    #[schema(example = "alive")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Process start time plus the readiness checks.
pub struct HealthState {
    started_at: DateTime<Utc>,
    started: Instant,
    checks: Vec<Arc<dyn DependencyCheck>>,
}

impl HealthState {
    /// Capture the start time with no dependency checks.
    pub fn new() -> Self {
        Self::with_checks(Vec::new())
    }

    pub fn with_checks(checks: Vec<Arc<dyn DependencyCheck>>) -> Self {
        Self {
            started_at: Utc::now(),
            started: Instant::now(),
            checks,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since start, measured on the monotonic clock.
    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: SERVICE_VERSION.to_string(),
            uptime_seconds: self.uptime_seconds(),
        }
    }

    pub async fn readiness(&self) -> ReadinessReport {
        let mut failed = Vec::new();
        for check in &self.checks {
            if let Err(reason) = check.check().await {
                tracing::warn!("Readiness check '{}' failed: {}", check.name(), reason);
                failed.push(check.name().to_string());
            }
        }

        ReadinessReport {
            status: if failed.is_empty() { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            failed,
        }
    }

    pub fn liveness(&self) -> LivenessReport {
        LivenessReport {
            status: "alive".to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}
