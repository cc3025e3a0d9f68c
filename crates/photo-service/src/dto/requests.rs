//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field rules delegate to the domain value objects so a request that passes
//! `validate()` always parses.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use photo_core::value_objects::{CommentText, ImageUrl, Username};
use photo_core::DomainError;

fn to_validation_error(code: &'static str, err: DomainError) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(err.to_string()))
}

fn validate_username(value: &str) -> Result<(), ValidationError> {
    Username::parse(value)
        .map(|_| ())
        .map_err(|e| to_validation_error("username", e))
}

fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    ImageUrl::parse(value)
        .map(|_| ())
        .map_err(|e| to_validation_error("image_url", e))
}

fn validate_comment(value: &str) -> Result<(), ValidationError> {
    CommentText::parse(value)
        .map(|_| ())
        .map_err(|e| to_validation_error("comment", e))
}

// ============================================================================
// User Requests
// ============================================================================

/// Login-or-signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
}

/// Change the caller's username
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameUserRequest {
    /// New username
    #[validate(custom(function = "validate_username"))]
    pub username: String,
}

/// Follow, unfollow, ban or unban another user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RelationRequest {
    /// The other user
    #[validate(custom(function = "validate_username"))]
    pub username: String,
}

// ============================================================================
// Image Requests
// ============================================================================

/// Register an uploaded image
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadImageRequest {
    /// Owner
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(alias = "imageurl")]
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: String,
}

/// Add or remove a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(custom(function = "validate_comment"))]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            username: "alice".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = LoginRequest {
            username: String::new(),
        };
        assert!(empty.validate().is_err());

        let spaced = LoginRequest {
            username: "al ice".to_string(),
        };
        assert!(spaced.validate().is_err());

        let too_long = LoginRequest {
            username: "a".repeat(33),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_upload_request_validation() {
        let valid = UploadImageRequest {
            username: "bob".to_string(),
            image_url: "http://x/1.jpg".to_string(),
        };
        assert!(valid.validate().is_ok());

        let no_url = UploadImageRequest {
            username: "bob".to_string(),
            image_url: "   ".to_string(),
        };
        let errors = no_url.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("image_url"));
    }

    #[test]
    fn test_upload_request_accepts_legacy_field_name() {
        let request: UploadImageRequest =
            serde_json::from_str(r#"{"username":"bob","imageurl":"http://x/2.jpg"}"#).unwrap();
        assert_eq!(request.image_url, "http://x/2.jpg");
    }

    #[test]
    fn test_comment_request_validation() {
        let valid = CommentRequest {
            comment: "nice, really".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CommentRequest {
            comment: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = CommentRequest {
            comment: "x".repeat(CommentText::MAX_LEN + 1),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_relation_request_deserialize() {
        let request: RelationRequest = serde_json::from_str(r#"{"username":"carol"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.username, "carol");
    }
}
