//! Domain errors - error types for the domain layer

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::value_objects::{ImageId, ImageIdParseError};

/// Coarse classification every error falls into
///
/// The dispatcher in front of the core maps these to transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Entity absent
    NotFound,
    /// Uniqueness or key conflict
    ConstraintViolation,
    /// Connection, transport or timeout failure
    StoreUnavailable,
    /// Malformed identifier or empty required field
    InvalidInput,
    /// Anything else
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotFound => "not_found",
            Self::ConstraintViolation => "constraint_violation",
            Self::StoreUnavailable => "store_unavailable",
            Self::InvalidInput => "invalid_input",
            Self::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Image not found: {0}")]
    ImageNotFound(ImageId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid comment: {0}")]
    InvalidComment(String),

    #[error("Invalid image url: {0}")]
    InvalidImageUrl(String),

    #[error("Invalid image id: {0}")]
    InvalidImageId(#[from] ImageIdParseError),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Operation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) | Self::ImageNotFound(_) => ErrorKind::NotFound,

            Self::ValidationError(_)
            | Self::InvalidUsername(_)
            | Self::InvalidComment(_)
            | Self::InvalidImageUrl(_)
            | Self::InvalidImageId(_)
            | Self::ContentTooLong { .. } => ErrorKind::InvalidInput,

            Self::UsernameTaken(_) | Self::ConstraintViolation(_) => {
                ErrorKind::ConstraintViolation
            }

            Self::StoreUnavailable(_) | Self::Timeout(_) => ErrorKind::StoreUnavailable,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::InvalidComment(_) => "INVALID_COMMENT",
            Self::InvalidImageUrl(_) => "INVALID_IMAGE_URL",
            Self::InvalidImageId(_) => "INVALID_IMAGE_ID",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",

            // Infrastructure
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::ConstraintViolation
    }

    /// Check if the store could not be reached in time
    pub fn is_unavailable(&self) -> bool {
        self.kind() == ErrorKind::StoreUnavailable
    }
}
