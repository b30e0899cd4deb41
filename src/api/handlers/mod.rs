//! HTTP request handlers.

pub mod health_handler;
pub mod system_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use system_handler::system_routes;
pub use user_handler::user_routes;
