//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use photo_core::entities::{Image, User};

use super::responses::{ImageResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            following: user.following.clone(),
            banned: user.banned.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            following: user.following,
            banned: user.banned,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Image Mappers
// ============================================================================

impl From<&Image> for ImageResponse {
    fn from(image: &Image) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url.clone(),
            username: image.username.clone(),
            likes: image.likes,
            comments: image.comments.clone(),
            created_at: image.created_at,
        }
    }
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
            username: image.username,
            likes: image.likes,
            comments: image.comments,
            created_at: image.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use photo_core::ImageId;

    #[test]
    fn test_user_mapper_keeps_duplicates() {
        let mut user = User::new("alice".to_string());
        user.following = vec!["bob".to_string(), "bob".to_string()];

        let response = UserResponse::from(&user);
        assert_eq!(response.username, "alice");
        assert_eq!(response.following.len(), 2);
        assert!(response.banned.is_empty());
    }

    #[test]
    fn test_image_mapper() {
        let image = Image {
            id: ImageId::new(3),
            image_url: "http://x/3.jpg".to_string(),
            username: "bob".to_string(),
            likes: 2,
            comments: vec!["nice".to_string()],
            created_at: Utc::now(),
        };

        let response = ImageResponse::from(image.clone());
        assert_eq!(response.id, image.id);
        assert_eq!(response.likes, 2);
        assert_eq!(response.comments, image.comments);
    }
}
