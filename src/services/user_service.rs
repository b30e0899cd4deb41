//! User service - Handles user-related business logic.
//!
//! Orchestrates repository operations and records domain events in the log.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Register a new user; fails with `DuplicateEmail` if the email is taken
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// Number of registered users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list().await?;
        tracing::info!("Retrieved {} users", users.len());
        Ok(users)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let email = new_user.email.clone();
        match self.repo.create(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Created user: {}", user.email);
                Ok(user)
            }
            Err(AppError::DuplicateEmail) => {
                tracing::debug!("Rejected duplicate email: {}", email);
                Err(AppError::DuplicateEmail)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(user_id = removed.id, "Deleted user: {}", removed.email);
        Ok(())
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::MockUserRepository;

    fn create_test_user(id: UserId) -> User {
        User {
            id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(create_test_user(id))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user(5).await.unwrap();
        assert_eq!(user.id, 5);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(1).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

        let service = UserManager::new(Arc::new(repo));
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_user_passes_input_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(NewUser::new("Ann", "a@x.com")))
            .times(1)
            .returning(|new_user| Ok(User::new(1, new_user)));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(NewUser::new("Ann", "a@x.com"))
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::DuplicateEmail));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(NewUser::new("Bob", "a@x.com")).await;
        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_create_user_propagates_internal_fault() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::internal("lock poisoned")));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(NewUser::new("Bob", "b@x.com")).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(3))
            .returning(|id| Ok(create_test_user(id)));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.delete_user(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let service = UserManager::new(Arc::new(repo));
        assert!(matches!(
            service.delete_user(3).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_count_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().returning(|| Ok(4));

        let service = UserManager::new(Arc::new(repo));
        assert_eq!(service.count_users().await.unwrap(), 4);
    }
}
