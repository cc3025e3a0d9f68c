//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use photo_core::value_objects::ImageId;

// ============================================================================
// User Responses
// ============================================================================

/// User profile with its relationship sets
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub following: Vec<String>,
    pub banned: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// How a login request was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    /// Username already existed
    Login,
    /// Username was registered by this request
    Signup,
}

/// Login-or-signup response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub outcome: LoginOutcome,
    pub message: String,
}

impl LoginResponse {
    pub fn login(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            outcome: LoginOutcome::Login,
            message: "Successful login into existing account".to_string(),
        }
    }

    pub fn signup(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            outcome: LoginOutcome::Signup,
            message: "Successful sign up and login".to_string(),
        }
    }

    /// True when the request created the account
    pub fn is_signup(&self) -> bool {
        self.outcome == LoginOutcome::Signup
    }
}

// ============================================================================
// Image Responses
// ============================================================================

/// Image record
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: ImageId,
    pub image_url: String,
    pub username: String,
    pub likes: i64,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of registering an upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadImageResponse {
    pub username: String,
    pub image_id: ImageId,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
