//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and transactions.

use sqlx::SqlitePool;
use tempfile::TempDir;
use user_core::types::{NewUser, User};
use user_storage::SqliteUserStore;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let store = user_storage::connect(&db_url, 5)
            .await
            .expect("Failed to open test database");

        Self {
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        self.store.pool()
    }
}

/// Test fixture: a valid create request
pub fn new_user(first_name: &str, last_name: &str) -> NewUser {
    NewUser::new(
        format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase()),
        first_name,
        last_name,
    )
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, first_name: &str, last_name: &str) -> User {
    user_storage::users::create(pool, new_user(first_name, last_name))
        .await
        .expect("Failed to create test user")
}
