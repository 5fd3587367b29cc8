use crate::users;
use async_trait::async_trait;
use sqlx::SqlitePool;
use user_core::{
    error::Result,
    storage::UserStore,
    types::{NewUser, User, UserChanges, UserId},
};

/// User store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: NewUser) -> Result<User> {
        let user = users::create(&self.pool, user).await?;
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<Option<User>> {
        Ok(users::update(&self.pool, id, changes).await?)
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        let deleted = users::delete(&self.pool, id).await?;
        if deleted {
            tracing::debug!(user_id = id, "User deleted");
        }
        Ok(deleted)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(crate::StorageError::from)?;
        Ok(())
    }
}
