//! Error handling utilities for repositories

use photo_core::error::DomainError;
use photo_core::value_objects::{ImageId, Username};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Transport-level failures are reported as `StoreUnavailable`; everything
/// else the driver reports becomes a `DatabaseError`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => DomainError::StoreUnavailable(e.to_string()),
        SqlxError::Database(ref db_err) if db_err.is_unique_violation() => {
            DomainError::ConstraintViolation(db_err.message().to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(username: &Username) -> DomainError {
    DomainError::UserNotFound(username.to_string())
}

/// Create an "image not found" error
pub fn image_not_found(id: ImageId) -> DomainError {
    DomainError::ImageNotFound(id)
}

/// Create a "username taken" error
pub fn username_taken(username: &Username) -> DomainError {
    DomainError::UsernameTaken(username.to_string())
}
