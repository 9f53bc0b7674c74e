//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; a duplicate email is a storage error
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<User>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `users` table (with its unique email index) if missing.
    pub async fn init_schema(&self) -> AppResult<()> {
        common::create_table(&self.db, UserEntity)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(user_id = %user.id, "User stored");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
