//! Image entity - metadata for one uploaded image

use chrono::{DateTime, Utc};

use crate::value_objects::ImageId;

/// Stored image record
///
/// `likes` is a plain counter. Removing a like from an image with zero likes
/// drives it negative; the store does not clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: ImageId,
    pub image_url: String,
    pub username: String,
    pub likes: i64,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Image {
    /// Number of comments
    #[inline]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}
