//! User entity - an account and its relationship sets

use chrono::{DateTime, Utc};

/// User account with its following and banned sets
///
/// Both sets keep insertion order and may contain duplicates or names of
/// users that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub following: Vec<String>,
    pub banned: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a freshly signed-up user with empty sets
    pub fn new(username: String) -> Self {
        Self {
            username,
            following: Vec::new(),
            banned: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether `target` appears in the following set
    pub fn follows(&self, target: &str) -> bool {
        self.following.iter().any(|name| name == target)
    }

    /// Check whether `target` appears in the banned set
    pub fn has_banned(&self, target: &str) -> bool {
        self.banned.iter().any(|name| name == target)
    }

}
