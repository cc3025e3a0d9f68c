//! Image ID - server-generated, monotonically increasing identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a stored image record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ImageId(i64);

impl ImageId {
    /// Create an ImageId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation (e.g. a path segment)
    ///
    /// Generated identifiers start at 1, so zero and negative values are rejected.
    pub fn parse(s: &str) -> Result<Self, ImageIdParseError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ImageIdParseError::InvalidFormat)?;

        Self::positive(id)
    }

    /// Accept only ids the store can have issued
    fn positive(id: i64) -> Result<Self, ImageIdParseError> {
        if id <= 0 {
            return Err(ImageIdParseError::OutOfRange);
        }

        Ok(Self(id))
    }
}

/// Error when parsing an ImageId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ImageIdParseError {
    #[error("invalid image id format")]
    InvalidFormat,

    #[error("image id must be positive")]
    OutOfRange,
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ImageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ImageId> for i64 {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ImageId {
    type Err = ImageIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageId::parse(s)
    }
}

impl Serialize for ImageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for ImageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ImageIdVisitor;

        impl Visitor<'_> for ImageIdVisitor {
            type Value = ImageId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing an image ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<ImageId, E>
            where
                E: de::Error,
            {
                ImageId::positive(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<ImageId, E>
            where
                E: de::Error,
            {
                let id = i64::try_from(value)
                    .map_err(|_| de::Error::custom(ImageIdParseError::OutOfRange))?;
                ImageId::positive(id).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<ImageId, E>
            where
                E: de::Error,
            {
                ImageId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(ImageIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ImageId::parse("42").unwrap(), ImageId::new(42));
        assert_eq!(" 7 ".parse::<ImageId>().unwrap(), ImageId::new(7));
        assert_eq!(ImageId::parse("abc"), Err(ImageIdParseError::InvalidFormat));
        assert_eq!(ImageId::parse("0"), Err(ImageIdParseError::OutOfRange));
        assert_eq!(ImageId::parse("-3"), Err(ImageIdParseError::OutOfRange));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ImageId::new(12)).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn test_deserialize_string_or_number() {
        let from_num: ImageId = serde_json::from_str("12").unwrap();
        let from_str: ImageId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(from_num, from_str);
    }

    #[test]
    fn test_deserialize_rejects_non_positive() {
        assert!(serde_json::from_str::<ImageId>("0").is_err());
        assert!(serde_json::from_str::<ImageId>("-3").is_err());
        assert!(serde_json::from_str::<ImageId>("\"-3\"").is_err());
        assert!(serde_json::from_str::<ImageId>("18446744073709551615").is_err());
    }
}
