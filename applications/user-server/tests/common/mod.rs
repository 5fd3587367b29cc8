/// Common test utilities and fixtures
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use user_server::{create_router, AppState};
use user_storage::SqliteUserStore;

/// Application under test, backed by a throwaway SQLite file
pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteUserStore>,
    _temp_dir: TempDir,
}

/// Create the router over a fresh database with migrations applied
pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("users.db").display());

    let store = Arc::new(
        user_storage::connect(&db_url, 5)
            .await
            .expect("Failed to open test database"),
    );

    let app_state = AppState::new(store.clone());

    TestApp {
        router: create_router(app_state),
        store,
        _temp_dir: temp_dir,
    }
}

/// Test user payloads
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn valid_user(n: usize) -> Value {
        json!({
            "email": format!("user{n}@example.com"),
            "first_name": format!("First{n}"),
            "last_name": format!("Last{n}"),
            "avatar": format!("http://example.com/avatar{n}.png"),
        })
    }

    pub fn invalid_email_user() -> Value {
        json!({
            "email": "invalid-email",
            "first_name": "Invalid",
            "last_name": "Email",
            "avatar": "http://example.com/avatar.png",
        })
    }
}
