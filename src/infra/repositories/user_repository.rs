//! In-memory user repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations own every record; callers only ever receive clones.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create a new user, rejecting an email that is already registered
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Remove user by ID, returning the removed record
    async fn delete(&self, id: UserId) -> AppResult<User>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Debug)]
struct StoreInner {
    users: Vec<User>,
    /// Highest id handed out so far; ids start at 1 and are never reused.
    last_id: UserId,
}

/// Process-local implementation of [`UserRepository`].
///
/// The duplicate-email check, id assignment and insert run under one write
/// lock, so concurrent creates with the same email cannot both succeed.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: Vec::new(),
                last_id: 0,
            }),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|e| AppError::internal(format!("User store lock poisoned: {}", e)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|e| AppError::internal(format!("User store lock poisoned: {}", e)))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut inner = self.write()?;

        if inner.users.iter().any(|u| u.has_email(&new_user.email)) {
            return Err(AppError::DuplicateEmail);
        }

        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("User id space exhausted"))?;
        let user = User::new(id, new_user);

        inner.last_id = id;
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: UserId) -> AppResult<User> {
        let mut inner = self.write()?;

        let position = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AppError::NotFound)?;

        Ok(inner.users.remove(position))
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.users.len())
    }
}
