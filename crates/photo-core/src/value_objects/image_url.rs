//! Image URL - reference to image bytes stored elsewhere

use std::fmt;

use crate::error::DomainError;

/// Validated image reference
///
/// The core never dereferences the URL; it only checks that one was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Maximum length in characters
    pub const MAX_LEN: usize = 2048;

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidImageUrl(
                "image url must not be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::InvalidImageUrl(format!(
                "image url must be at most {} characters",
                Self::MAX_LEN
            )));
        }

        Ok(Self(trimmed.to_string()))
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

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
