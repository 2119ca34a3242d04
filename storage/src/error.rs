use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("There is already an athlete registered with identity code: {0}")]
    DuplicateIdentityCode(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Route a unique-constraint failure from an INSERT through `classify`,
/// which receives the engine message; any other error stays `Database`.
pub(crate) fn map_unique_violation(
    error: sqlx::Error,
    classify: impl FnOnce(&str) -> StorageError,
) -> StorageError {
    match error {
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
            classify(db.message())
        }
        other => StorageError::Database(other),
    }
}
