//! Comment text attached to an image

use std::fmt;

use crate::error::DomainError;

/// Validated comment body
///
/// Comments are stored one row each, so any character is allowed. Only empty
/// (or whitespace-only) and oversized comments are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentText(String);

impl CommentText {
    /// Maximum length in characters
    pub const MAX_LEN: usize = 2200;

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::InvalidComment(
                "comment must not be empty".to_string(),
            ));
        }

        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::ContentTooLong { max: Self::MAX_LEN });
        }

        Ok(Self(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let comment = CommentText::parse("nice shot").unwrap();
        assert_eq!(comment.as_str(), "nice shot");
    }

    #[test]
    fn test_delimiters_are_plain_text() {
        let comment = CommentText::parse("wow ~ so, good").unwrap();
        assert_eq!(comment.as_str(), "wow ~ so, good");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            CommentText::parse(""),
            Err(DomainError::InvalidComment(_))
        ));
        assert!(CommentText::parse("   ").is_err());
    }

    #[test]
    fn test_parse_too_long() {
        let err = CommentText::parse("x".repeat(CommentText::MAX_LEN + 1)).unwrap_err();
        assert!(matches!(err, DomainError::ContentTooLong { max } if max == CommentText::MAX_LEN));
    }
}
