//! Service context - dependency container for services
//!
//! Holds the repositories and the per-operation deadline needed by services.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use photo_core::traits::{
    ImageRepository, RepoResult, StoreHealth, StreamRepository, UserRepository,
};
use tracing::warn;

use super::error::{ServiceError, ServiceResult};

/// Deadline applied when none is configured
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Service context containing all dependencies
///
/// Repositories are held as trait objects so the PostgreSQL implementations
/// can be swapped for another store or for in-memory doubles.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    image_repo: Arc<dyn ImageRepository>,
    stream_repo: Arc<dyn StreamRepository>,
    store_health: Arc<dyn StoreHealth>,

    operation_timeout: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        image_repo: Arc<dyn ImageRepository>,
        stream_repo: Arc<dyn StreamRepository>,
        store_health: Arc<dyn StoreHealth>,
        operation_timeout: Duration,
    ) -> Self {
        Self {
            user_repo,
            image_repo,
            stream_repo,
            store_health,
            operation_timeout,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the image repository
    pub fn image_repo(&self) -> &dyn ImageRepository {
        self.image_repo.as_ref()
    }

    /// Get the stream repository
    pub fn stream_repo(&self) -> &dyn StreamRepository {
        self.stream_repo.as_ref()
    }

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    /// Deadline applied to every store operation
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Run a store operation under the configured deadline
    ///
    /// The future is dropped on expiry, which cancels the in-flight query.
    pub(crate) async fn run<T, F>(&self, operation: &'static str, fut: F) -> ServiceResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result.map_err(ServiceError::from),
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.operation_timeout.as_millis() as u64,
                    "Store operation timed out"
                );
                Err(ServiceError::Timeout {
                    operation,
                    after: self.operation_timeout,
                })
            }
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("operation_timeout", &self.operation_timeout)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    image_repo: Option<Arc<dyn ImageRepository>>,
    stream_repo: Option<Arc<dyn StreamRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    operation_timeout: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            image_repo: None,
            stream_repo: None,
            store_health: None,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn image_repo(mut self, repo: Arc<dyn ImageRepository>) -> Self {
        self.image_repo = Some(repo);
        self
    }

    pub fn stream_repo(mut self, repo: Arc<dyn StreamRepository>) -> Self {
        self.stream_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.image_repo
                .ok_or_else(|| ServiceError::validation("image_repo is required"))?,
            self.stream_repo
                .ok_or_else(|| ServiceError::validation("stream_repo is required"))?,
            self.store_health
                .ok_or_else(|| ServiceError::validation("store_health is required"))?,
            self.operation_timeout,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
