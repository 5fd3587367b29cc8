//! User record queries

use crate::StorageError;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use user_core::types::{NewUser, User, UserChanges, UserId};

type Result<T> = std::result::Result<T, StorageError>;

const SELECT_BY_ID: &str =
    "SELECT id, email, first_name, last_name, avatar FROM users WHERE id = ?";

const SELECT_ALL: &str =
    "SELECT id, email, first_name, last_name, avatar FROM users ORDER BY id";

/// Insert a user and return it with its assigned id
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let result = sqlx::query(
        "INSERT INTO users (email, first_name, last_name, avatar) VALUES (?, ?, ?, ?)",
    )
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.avatar)
    .execute(pool)
    .await?;

    Ok(user.into_user(result.last_insert_rowid()))
}

/// Get a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Get all users, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(SELECT_ALL)
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Apply a partial update and re-read the row
///
/// The write and the re-read share one transaction, so readers see either
/// the old row or every supplied change, never a subset.
///
/// # Returns
///
/// `None` if no user has this id
pub async fn update(pool: &SqlitePool, id: UserId, changes: UserChanges) -> Result<Option<User>> {
    let mut tx = pool.begin().await?;

    if !changes.is_empty() {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut assignments = builder.separated(", ");

        if let Some(email) = changes.email {
            assignments.push("email = ").push_bind_unseparated(email);
        }
        if let Some(first_name) = changes.first_name {
            assignments.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = changes.last_name {
            assignments.push("last_name = ").push_bind_unseparated(last_name);
        }
        if let Some(avatar) = changes.avatar {
            assignments.push("avatar = ").push_bind_unseparated(avatar);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
    }

    let user = sqlx::query_as::<_, User>(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(user)
}

/// Delete a user
///
/// # Returns
///
/// `true` if a row was removed
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count stored users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
