//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier (positive, never reused)
pub type UserId = u64;

/// User domain entity.
///
/// Records are immutable once created: the store hands out clones and
/// there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: UserId,
    /// User display name
    #[schema(example = "Ann")]
    pub name: String,
    /// User email address (unique, exact match)
    #[schema(example = "ann@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a record from validated input and a store-assigned id.
    pub fn new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            created_at: Utc::now(),
        }
    }

    /// Exact, case-sensitive email comparison used for uniqueness.
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

/// Validated user creation data.
///
/// Only constructed from a request that passed structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
