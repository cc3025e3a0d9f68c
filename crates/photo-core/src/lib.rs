//! # photo-core
//!
//! Domain layer containing entities, value objects, errors and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Image, User};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    ImageRepository, RepoResult, StoreHealth, StreamRepository, UserRepository, STREAM_LIMIT,
};
pub use value_objects::{CommentText, ImageId, ImageIdParseError, ImageUrl, Username};
