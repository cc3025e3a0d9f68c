//! Stream service

use photo_core::value_objects::Username;
use photo_core::STREAM_LIMIT;
use tracing::{debug, instrument};

use crate::dto::ImageResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stream service
pub struct StreamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StreamService<'a> {
    /// Create a new StreamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The ten most recent images from users `username` follows, newest first
    ///
    /// Bans are not applied. A user following nobody gets an empty stream.
    #[instrument(skip(self))]
    pub async fn get_stream(&self, username: &str) -> ServiceResult<Vec<ImageResponse>> {
        let username = Username::parse(username)?;
        let images = self
            .ctx
            .run(
                "get_stream",
                self.ctx.stream_repo().stream(&username, STREAM_LIMIT),
            )
            .await?;

        debug!(count = images.len(), "Stream fetched");
        Ok(images.into_iter().map(ImageResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dto::{RelationRequest, UploadImageRequest};
    use crate::services::testing::{context, MemoryStore};
    use crate::services::{ImageService, ServiceError, UserService};
    use photo_core::ErrorKind;

    async fn upload(ctx: &ServiceContext, owner: &str, url: &str) {
        ImageService::new(ctx)
            .upload_image(UploadImageRequest {
                username: owner.to_string(),
                image_url: url.to_string(),
            })
            .await
            .unwrap();
    }

    async fn follow(ctx: &ServiceContext, username: &str, target: &str) {
        UserService::new(ctx)
            .follow(
                username,
                RelationRequest {
                    username: target.to_string(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_stream_scenario() {
        let ctx = context(Arc::new(MemoryStore::default()));
        let users = UserService::new(&ctx);
        users.create_user("alice").await.unwrap();
        users.create_user("bob").await.unwrap();
        follow(&ctx, "alice", "bob").await;
        upload(&ctx, "bob", "http://x/1.jpg").await;

        let stream = StreamService::new(&ctx).get_stream("alice").await.unwrap();
        assert_eq!(stream.len(), 1);
        assert_eq!(stream[0].image_url, "http://x/1.jpg");
    }

    #[tokio::test]
    async fn test_stream_following_nobody() {
        let ctx = context(Arc::new(MemoryStore::default()));
        UserService::new(&ctx).create_user("alice").await.unwrap();
        upload(&ctx, "bob", "http://x/1.jpg").await;

        let stream = StreamService::new(&ctx).get_stream("alice").await.unwrap();
        assert!(stream.is_empty());
    }

    #[tokio::test]
    async fn test_stream_missing_user() {
        let ctx = context(Arc::new(MemoryStore::default()));
        let err = StreamService::new(&ctx).get_stream("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(_)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_stream_is_capped_and_ordered() {
        let ctx = context(Arc::new(MemoryStore::default()));
        UserService::new(&ctx).create_user("alice").await.unwrap();
        follow(&ctx, "alice", "bob").await;
        follow(&ctx, "alice", "carol").await;

        for n in 0..8 {
            upload(&ctx, "bob", &format!("http://x/b{n}.jpg")).await;
            upload(&ctx, "carol", &format!("http://x/c{n}.jpg")).await;
        }
        upload(&ctx, "dave", "http://x/d.jpg").await;

        let stream = StreamService::new(&ctx).get_stream("alice").await.unwrap();
        assert_eq!(stream.len(), 10);
        assert!(stream.iter().all(|i| i.username != "dave"));
        assert!(stream.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_stream_ignores_bans() {
        let ctx = context(Arc::new(MemoryStore::default()));
        let users = UserService::new(&ctx);
        users.create_user("alice").await.unwrap();
        follow(&ctx, "alice", "bob").await;
        users
            .ban(
                "alice",
                RelationRequest {
                    username: "bob".to_string(),
                },
            )
            .await
            .unwrap();
        upload(&ctx, "bob", "http://x/1.jpg").await;

        let stream = StreamService::new(&ctx).get_stream("alice").await.unwrap();
        assert_eq!(stream.len(), 1);
    }
}
