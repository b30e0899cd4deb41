//! User Registry - in-memory user records and health probes over HTTP
//!
//! A single-process service meant to run behind a load balancer or
//! orchestrator. Users live in an in-memory store owned by the
//! application state; nothing survives a restart.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: User use cases, health state, load simulation
//! - **infra**: In-memory repository and metrics registry
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default port (8000)
//! cargo run
//!
//! # Override bind address
//! cargo run -- serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{NewUser, User, UserId};
pub use errors::{AppError, AppResult};
pub use infra::UserStore;
