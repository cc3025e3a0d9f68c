//! PostgreSQL implementation of ImageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use photo_core::entities::Image;
use photo_core::traits::{ImageRepository, RepoResult};
use photo_core::value_objects::{CommentText, ImageId, ImageUrl, Username};

use crate::models::ImageModel;

use super::error::{image_not_found, map_db_error};

/// Column list shared by every image read; comments come back in insertion order
pub(crate) const IMAGE_COLUMNS: &str = r"
    i.id, i.image_url, i.username, i.likes,
    ARRAY(SELECT c.body FROM image_comments c
          WHERE c.image_id = i.id ORDER BY c.id) AS comments,
    i.created_at
";

/// PostgreSQL implementation of ImageRepository
#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    /// Create a new PgImageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply `delta` to the like counter in a single statement
    async fn adjust_likes(&self, id: ImageId, delta: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE images SET likes = likes + $2 WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(image_not_found(id));
        }

        Ok(())
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self))]
    async fn insert(&self, image_url: &ImageUrl, owner: &Username) -> RepoResult<ImageId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO images (image_url, username)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(image_url.as_str())
        .bind(owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(image_id = id, owner = %owner, "Image stored");

        Ok(ImageId::new(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ImageId) -> RepoResult<bool> {
        // Comment rows go with the image through ON DELETE CASCADE
        let result = sqlx::query(
            r"
            DELETE FROM images WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn add_like(&self, id: ImageId) -> RepoResult<()> {
        self.adjust_likes(id, 1).await
    }

    #[instrument(skip(self))]
    async fn remove_like(&self, id: ImageId) -> RepoResult<()> {
        self.adjust_likes(id, -1).await
    }

    #[instrument(skip(self, text))]
    async fn add_comment(&self, id: ImageId, text: &CommentText) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            INSERT INTO image_comments (image_id, body)
            SELECT id, $2 FROM images WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(text.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(image_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn remove_comment(&self, id: ImageId, text: &CommentText) -> RepoResult<()> {
        let (image_exists, removed) = sqlx::query_as::<_, (bool, i64)>(
            r"
            WITH removed AS (
                DELETE FROM image_comments WHERE image_id = $1 AND body = $2
                RETURNING 1
            )
            SELECT EXISTS(SELECT 1 FROM images WHERE id = $1),
                   (SELECT COUNT(*) FROM removed)
            ",
        )
        .bind(id.into_inner())
        .bind(text.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !image_exists {
            return Err(image_not_found(id));
        }

        debug!(removed, "Comments removed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: ImageId) -> RepoResult<Option<Image>> {
        let sql = format!("SELECT {IMAGE_COLUMNS} FROM images i WHERE i.id = $1");

        let result = sqlx::query_as::<_, ImageModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Image::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner: &Username) -> RepoResult<Vec<Image>> {
        let sql = format!(
            r"
            SELECT {IMAGE_COLUMNS}
            FROM images i
            WHERE i.username = $1
            ORDER BY i.created_at DESC, i.id DESC
            "
        );

        let results = sqlx::query_as::<_, ImageModel>(&sql)
            .bind(owner.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Image::from).collect())
    }
}
