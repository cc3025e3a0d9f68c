//! Username - the primary key of a user account

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Validated username
///
/// Usernames are case-sensitive and stored exactly as given. They must be
/// 1-32 characters long and may not contain whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username(String);

impl Username {
    /// Maximum length in characters
    pub const MAX_LEN: usize = 32;

    /// Parse and validate a username
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::InvalidUsername(
                "username must not be empty".to_string(),
            ));
        }

        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::InvalidUsername(format!(
                "username must be at most {} characters",
                Self::MAX_LEN
            )));
        }

        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidUsername(
                "username must not contain whitespace or control characters".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// Borrow the username as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Username {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(s).map_err(serde::de::Error::custom)
    }
}
