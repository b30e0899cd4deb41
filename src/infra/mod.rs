//! Infrastructure layer - Storage and instrumentation
//!
//! - In-memory user repository
//! - Request metrics registry

pub mod metrics;
pub mod repositories;

pub use metrics::Metrics;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
