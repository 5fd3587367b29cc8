/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error while preparing the database location
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for user_core::UserError {
    fn from(err: StorageError) -> Self {
        user_core::UserError::storage(err.to_string())
    }
}
