//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Service Metadata
// =============================================================================

/// Human-readable service name reported by the info and status endpoints
pub const SERVICE_NAME: &str = "User Registry Service";

/// Service version (taken from the package manifest)
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short description reported by the root endpoint
pub const SERVICE_DESCRIPTION: &str = "In-memory user registry with health probes";

/// Status reported by the status endpoint while the process serves requests
pub const STATUS_RUNNING: &str = "running";

// =============================================================================
// Well-known Paths
// =============================================================================

/// Swagger UI location
pub const DOCS_PATH: &str = "/docs";

/// OpenAPI document location
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Health check location
pub const HEALTH_PATH: &str = "/health";

/// Prometheus exposition location
pub const METRICS_PATH: &str = "/metrics";

/// Prefix for versioned resource routes
pub const API_V1_PREFIX: &str = "/api/v1";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default deployment environment name
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Metrics are recorded unless explicitly disabled
pub const DEFAULT_METRICS_ENABLED: bool = true;

/// Wildcard origin accepted by the CORS configuration
pub const CORS_ANY_ORIGIN: &str = "*";

// =============================================================================
// Load Simulation
// =============================================================================

/// Seed string hashed by the load simulation endpoint
pub const LOAD_SEED: &str = "simulate-load";

/// Number of times the seed is repeated before hashing
pub const LOAD_SEED_REPEAT: usize = 1000;

/// Number of hex characters of the digest returned to the caller
pub const LOAD_HASH_PREFIX_LEN: usize = 16;
