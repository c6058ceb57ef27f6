//! Storage-specific error type wrapping sqlx errors.

use hotelhub_domain::error::{DatabaseError, HotelError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for HotelError {
    fn from(err: StorageError) -> Self {
        Self::Database(DatabaseError::new(err))
    }
}

/// Whether the store rejected a write because of a `UNIQUE` constraint.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
