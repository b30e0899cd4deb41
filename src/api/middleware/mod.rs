//! API middleware.

mod cors;
mod metrics;

pub use cors::build_cors_layer;
pub use metrics::track_metrics;
