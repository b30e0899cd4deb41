//! Application state - Dependency injection container.
//!
//! Built once at startup and shared by every handler; the user store lives
//! here rather than in module-level state.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Metrics, UserStore};
use crate::services::{HealthState, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Process start time and readiness checks
    pub health: Arc<HealthState>,
    /// Request metrics registry
    pub metrics: Arc<Metrics>,
    /// Runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store.
    pub fn from_config(config: Config) -> Self {
        let store = Arc::new(UserStore::new());
        Self::new(
            Arc::new(UserManager::new(store)),
            Arc::new(HealthState::new()),
            config,
        )
    }

    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        health: Arc<HealthState>,
        config: Config,
    ) -> Self {
        Self {
            user_service,
            health,
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}
