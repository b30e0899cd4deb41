//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    CORS_ANY_ORIGIN, DEFAULT_ENVIRONMENT, DEFAULT_METRICS_ENABLED, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Deployment environment name (e.g. "development", "production")
    pub environment: String,
    /// Record request metrics and expose them on `/metrics`
    pub metrics_enabled: bool,
    /// Allowed CORS origins; `["*"]` allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first when present. Missing variables fall back to defaults;
    /// unparsable values fall back to defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_host: env::var("HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("PORT", DEFAULT_SERVER_PORT),
            environment: env::var("ENVIRONMENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            metrics_enabled: parse_var("ENABLE_METRICS", DEFAULT_METRICS_ENABLED),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|_| vec![CORS_ANY_ORIGIN.to_string()]),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether any origin may call the API cross-origin.
    pub fn cors_allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == CORS_ANY_ORIGIN)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            metrics_enabled: DEFAULT_METRICS_ENABLED,
            cors_allowed_origins: vec![CORS_ANY_ORIGIN.to_string()],
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        vec![CORS_ANY_ORIGIN.to_string()]
    } else {
        origins
    }
}
