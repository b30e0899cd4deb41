//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, system_handler, user_handler};
use crate::domain::User;
use crate::services::{HealthReport, LivenessReport, LoadReport, ReadinessReport};
use crate::types::MessageResponse;

/// OpenAPI documentation for the user registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry Service",
        description = "In-memory user registry with health probes for containerized deployments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Service endpoints
        system_handler::root,
        system_handler::get_status,
        system_handler::simulate_load_handler,
        // Probes
        health_handler::health_check,
        health_handler::readiness_check,
        health_handler::liveness_check,
        // User endpoints
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            MessageResponse,
            HealthReport,
            ReadinessReport,
            LivenessReport,
            LoadReport,
            system_handler::ServiceInfo,
            system_handler::StatusResponse,
            user_handler::CreateUserRequest,
        )
    ),
    tags(
        (name = "Service", description = "Service metadata and status"),
        (name = "Health", description = "Orchestrator probes"),
        (name = "Users", description = "User registry operations")
    )
)]
pub struct ApiDoc;
