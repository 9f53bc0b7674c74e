//! User service - account registration.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate, hash and persist a new account
    async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        let user = User::new(name, email, password)?;
        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;

    #[tokio::test]
    async fn test_register_stores_hashed_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|u: &User| {
                u.email == "email@email.com" && u.password_hash != "123456" && u.validate_password("123456")
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .register("John Doe", "email@email.com", "123456")
            .await
            .unwrap();

        assert_eq!(user.name, "John Doe");
        assert!(!user.id.is_nil());
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();
        let service = UserManager::new(Arc::new(repo));

        let result = service.register("John Doe", "email@email.com", "").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_propagates_storage_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::internal("connection reset")));
        let service = UserManager::new(Arc::new(repo));

        let result = service.register("John Doe", "email@email.com", "123456").await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
