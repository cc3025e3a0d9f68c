//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the users table joined with its aggregated relationship rows
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub username: String,
    pub following: Vec<String>,
    pub banned: Vec<String>,
    pub created_at: DateTime<Utc>,
}
