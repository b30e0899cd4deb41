//! Synthetic CPU load for exercising autoscaling.

use serde::Serialize;
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

use crate::config::{LOAD_HASH_PREFIX_LEN, LOAD_SEED, LOAD_SEED_REPEAT};
use crate::errors::{AppError, AppResult};

/// Load simulation result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoadReport {
    #[schema(example = "Load simulation complete")]
    pub message: String,
    /// Truncated hex SHA-256 of the synthetic payload
    pub hash: String,
}

/// Hash the fixed synthetic payload and keep the first characters of the digest.
pub fn hash_payload() -> String {
    let payload = LOAD_SEED.repeat(LOAD_SEED_REPEAT);
    let digest = hex::encode(Sha256::digest(payload.as_bytes()));
    digest[..LOAD_HASH_PREFIX_LEN].to_string()
}

/// Run the hashing off the async worker threads.
pub async fn simulate_load() -> AppResult<LoadReport> {
    let hash = tokio::task::spawn_blocking(hash_payload)
        .await
        .map_err(|e| AppError::internal(format!("Load simulation task failed: {}", e)))?;

    Ok(LoadReport {
        message: "Load simulation complete".to_string(),
        hash,
    })
}
