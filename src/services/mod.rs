//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod health;
pub mod load;
mod user_service;

pub use health::{DependencyCheck, HealthReport, HealthState, LivenessReport, ReadinessReport};
pub use load::{simulate_load, LoadReport};
pub use user_service::{UserManager, UserService};
