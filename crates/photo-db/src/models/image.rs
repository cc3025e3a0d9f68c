//! Image database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the images table joined with its aggregated comment rows
#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: i64,
    pub image_url: String,
    pub username: String,
    pub likes: i64,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}
