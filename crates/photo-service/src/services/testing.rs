//! In-memory repository doubles for service tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use photo_core::entities::{Image, User};
use photo_core::error::DomainError;
use photo_core::traits::{
    ImageRepository, RepoResult, StoreHealth, StreamRepository, UserRepository,
};
use photo_core::value_objects::{CommentText, ImageId, ImageUrl, Username};

use super::context::ServiceContext;

#[derive(Default)]
struct State {
    users: BTreeMap<String, User>,
    images: BTreeMap<i64, Image>,
    next_id: i64,
}

/// Single store backing every repository trait
#[derive(Default)]
pub(crate) struct MemoryStore {
    state: Mutex<State>,
    down: AtomicBool,
    stalled: AtomicBool,
}

impl MemoryStore {
    /// Make every ping fail
    pub(crate) fn set_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    /// Make every ping hang
    pub(crate) fn set_stalled(&self) {
        self.stalled.store(true, Ordering::SeqCst);
    }

    /// Number of stored images
    pub(crate) fn image_count(&self) -> usize {
        self.state.lock().unwrap().images.len()
    }

    fn with_user<T>(
        &self,
        username: &Username,
        f: impl FnOnce(&mut User) -> T,
    ) -> RepoResult<T> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .get_mut(username.as_str())
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;
        Ok(f(user))
    }

    fn with_image<T>(&self, id: ImageId, f: impl FnOnce(&mut Image) -> T) -> RepoResult<T> {
        let mut state = self.state.lock().unwrap();
        let image = state
            .images
            .get_mut(&id.into_inner())
            .ok_or(DomainError::ImageNotFound(id))?;
        Ok(f(image))
    }
}

/// Strictly increasing timestamps keep ordering deterministic
fn stamp(id: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + id, 0).unwrap()
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn exists(&self, username: &Username) -> RepoResult<bool> {
        Ok(self.state.lock().unwrap().users.contains_key(username.as_str()))
    }

    async fn create(&self, username: &Username) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(username.as_str()) {
            return Err(DomainError::UsernameTaken(username.to_string()));
        }
        state
            .users
            .insert(username.to_string(), User::new(username.to_string()));
        Ok(())
    }

    async fn rename(&self, old: &Username, new: &Username) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(old.as_str()) {
            return Err(DomainError::UserNotFound(old.to_string()));
        }
        if old != new && state.users.contains_key(new.as_str()) {
            return Err(DomainError::UsernameTaken(new.to_string()));
        }
        let mut user = state
            .users
            .remove(old.as_str())
            .ok_or_else(|| DomainError::UserNotFound(old.to_string()))?;
        user.username = new.to_string();
        state.users.insert(new.to_string(), user);
        for image in state.images.values_mut() {
            if image.username == old.as_str() {
                image.username = new.to_string();
            }
        }
        Ok(())
    }

    async fn find(&self, username: &Username) -> RepoResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(username.as_str()).cloned())
    }

    async fn add_following(&self, username: &Username, target: &Username) -> RepoResult<()> {
        self.with_user(username, |u| u.following.push(target.to_string()))
    }

    async fn remove_following(&self, username: &Username, target: &Username) -> RepoResult<()> {
        self.with_user(username, |u| u.following.retain(|t| t != target.as_str()))
    }

    async fn add_banned(&self, username: &Username, target: &Username) -> RepoResult<()> {
        self.with_user(username, |u| u.banned.push(target.to_string()))
    }

    async fn remove_banned(&self, username: &Username, target: &Username) -> RepoResult<()> {
        self.with_user(username, |u| u.banned.retain(|t| t != target.as_str()))
    }
}

#[async_trait]
impl ImageRepository for MemoryStore {
    async fn insert(&self, image_url: &ImageUrl, owner: &Username) -> RepoResult<ImageId> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.images.insert(
            id,
            Image {
                id: ImageId::new(id),
                image_url: image_url.to_string(),
                username: owner.to_string(),
                likes: 0,
                comments: Vec::new(),
                created_at: stamp(id),
            },
        );
        Ok(ImageId::new(id))
    }

    async fn delete(&self, id: ImageId) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .images
            .remove(&id.into_inner())
            .is_some())
    }

    async fn add_like(&self, id: ImageId) -> RepoResult<()> {
        self.with_image(id, |i| i.likes += 1)
    }

    async fn remove_like(&self, id: ImageId) -> RepoResult<()> {
        self.with_image(id, |i| i.likes -= 1)
    }

    async fn add_comment(&self, id: ImageId, text: &CommentText) -> RepoResult<()> {
        self.with_image(id, |i| i.comments.push(text.to_string()))
    }

    async fn remove_comment(&self, id: ImageId, text: &CommentText) -> RepoResult<()> {
        self.with_image(id, |i| i.comments.retain(|c| c != text.as_str()))
    }

    async fn find(&self, id: ImageId) -> RepoResult<Option<Image>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .images
            .get(&id.into_inner())
            .cloned())
    }

    async fn find_by_owner(&self, owner: &Username) -> RepoResult<Vec<Image>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .images
            .values()
            .rev()
            .filter(|i| i.username == owner.as_str())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StreamRepository for MemoryStore {
    async fn stream(&self, username: &Username, limit: i64) -> RepoResult<Vec<Image>> {
        let state = self.state.lock().unwrap();
        let user = state
            .users
            .get(username.as_str())
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;

        Ok(state
            .images
            .values()
            .rev()
            .filter(|i| user.follows(&i.username))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        if self.stalled.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        if self.down.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Context whose repositories all point at `store`
pub(crate) fn context(store: Arc<MemoryStore>) -> ServiceContext {
    context_with_timeout(store, Duration::from_secs(5))
}

pub(crate) fn context_with_timeout(store: Arc<MemoryStore>, timeout: Duration) -> ServiceContext {
    ServiceContext::new(store.clone(), store.clone(), store.clone(), store, timeout)
}
