//! Application error types
//!
//! Errors raised while wiring the application together (configuration,
//! telemetry, store bootstrap).

use photo_core::{DomainError, ErrorKind};
use std::fmt;

use crate::config::ConfigError;
use crate::telemetry::TracingError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tracing(#[from] TracingError),

    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Classify the error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Database(_) => ErrorKind::StoreUnavailable,
            Self::Config(_) | Self::Tracing(_) => ErrorKind::Internal,
            Self::Domain(e) => e.kind(),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Tracing(_) => "TELEMETRY_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(AppError::not_found("user").kind(), ErrorKind::NotFound);
        assert_eq!(
            AppError::Database("refused".to_string()).kind(),
            ErrorKind::StoreUnavailable
        );
        assert_eq!(
            AppError::from(DomainError::UsernameTaken("bob".to_string())).kind(),
            ErrorKind::ConstraintViolation
        );
        assert_eq!(
            AppError::from(ConfigError::MissingVar("DATABASE_URL")).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::not_found("user").error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::from(DomainError::UserNotFound("alice".to_string())).error_code(),
            "UNKNOWN_USER"
        );
        assert_eq!(
            AppError::from(TracingError::AlreadyInitialized).error_code(),
            "TELEMETRY_ERROR"
        );
    }

    #[test]
    fn test_domain_display_is_transparent() {
        let err = AppError::from(DomainError::UserNotFound("alice".to_string()));
        assert_eq!(err.to_string(), "User not found: alice");
    }
}
