//! User Service Storage
//!
//! `SQLite` persistence layer for the user resource.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` module owns its own queries
//! - **Injected Store**: [`SqliteUserStore`] implements
//!   [`user_core::UserStore`] and is handed to the server at construction
//! - **Scoped Sessions**: every operation checks a connection out of the
//!   pool (or opens a transaction) for its own duration only
//!
//! # Example
//!
//! ```rust,no_run
//! use user_storage::{SqliteUserStore, create_pool, run_migrations};
//! use user_core::{NewUser, UserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://users.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! let user = store.create(NewUser::new("a@b.com", "A", "B")).await?;
//! assert!(store.get(user.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod users;

pub use context::SqliteUserStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://users.db>`)
/// * `max_connections` - Pool size; in-memory databases always get one
///   connection since each connection would otherwise see its own database
///
/// The parent directory of a file-backed database is created if missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;
    use std::time::Duration;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let in_memory = is_in_memory(database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(30)); // Wait up to 30s for locks

    let pool_options = if in_memory {
        // The database lives only as long as its connection
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::debug!(in_memory, "SQLite pool created");

    Ok(pool)
}

/// Whether the URL names an in-memory database
///
/// Covers both `sqlite::memory:` and `mode=memory` in the query string.
fn is_in_memory(database_url: &str) -> bool {
    if database_url.contains(":memory:") {
        return true;
    }

    database_url
        .split_once('?')
        .is_some_and(|(_, query)| query.split('&').any(|pair| pair == "mode=memory"))
}

/// Create a pool, apply migrations and wrap it in a [`SqliteUserStore`]
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqliteUserStore, StorageError> {
    let pool = create_pool(database_url, max_connections).await?;
    run_migrations(&pool).await?;
    Ok(SqliteUserStore::new(pool))
}
