//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Image, User};
use crate::error::DomainError;
use crate::value_objects::{CommentText, ImageId, ImageUrl, Username};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Maximum number of images returned by a stream query
pub const STREAM_LIMIT: i64 = 10;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if a username is registered
    async fn exists(&self, username: &Username) -> RepoResult<bool>;

    /// Register a new username
    ///
    /// Fails with `UsernameTaken` when the key already exists.
    async fn create(&self, username: &Username) -> RepoResult<()>;

    /// Rename a user and every image it owns, atomically
    async fn rename(&self, old: &Username, new: &Username) -> RepoResult<()>;

    /// Find user with its following and banned sets
    async fn find(&self, username: &Username) -> RepoResult<Option<User>>;

    /// Append `target` to the following set (duplicates allowed)
    async fn add_following(&self, username: &Username, target: &Username) -> RepoResult<()>;

    /// Remove every occurrence of `target` from the following set
    async fn remove_following(&self, username: &Username, target: &Username) -> RepoResult<()>;

    /// Append `target` to the banned set (duplicates allowed)
    async fn add_banned(&self, username: &Username, target: &Username) -> RepoResult<()>;

    /// Remove every occurrence of `target` from the banned set
    async fn remove_banned(&self, username: &Username, target: &Username) -> RepoResult<()>;
}

// ============================================================================
// Image Repository
// ============================================================================

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Store a new image record with zero likes and no comments
    async fn insert(&self, image_url: &ImageUrl, owner: &Username) -> RepoResult<ImageId>;

    /// Hard delete an image, returning whether a row was removed
    async fn delete(&self, id: ImageId) -> RepoResult<bool>;

    /// Increment the like counter
    async fn add_like(&self, id: ImageId) -> RepoResult<()>;

    /// Decrement the like counter (no lower bound)
    async fn remove_like(&self, id: ImageId) -> RepoResult<()>;

    /// Append a comment
    async fn add_comment(&self, id: ImageId, text: &CommentText) -> RepoResult<()>;

    /// Remove every comment exactly equal to `text`
    async fn remove_comment(&self, id: ImageId, text: &CommentText) -> RepoResult<()>;

    /// Find image by ID
    async fn find(&self, id: ImageId) -> RepoResult<Option<Image>>;

    /// List all images owned by a user, newest first
    async fn find_by_owner(&self, owner: &Username) -> RepoResult<Vec<Image>>;
}

// ============================================================================
// Stream Repository
// ============================================================================

#[async_trait]
pub trait StreamRepository: Send + Sync {
    /// Most recent images owned by anyone `username` follows
    ///
    /// Ordered by creation time descending, ties broken by id descending.
    /// Fails with `UserNotFound` if `username` does not exist.
    async fn stream(&self, username: &Username, limit: i64) -> RepoResult<Vec<Image>>;
}

// ============================================================================
// Store Health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
