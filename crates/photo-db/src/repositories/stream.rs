//! PostgreSQL implementation of StreamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use photo_core::entities::Image;
use photo_core::traits::{RepoResult, StreamRepository};
use photo_core::value_objects::Username;

use crate::models::ImageModel;

use super::error::{map_db_error, user_not_found};
use super::image::IMAGE_COLUMNS;

/// PostgreSQL implementation of StreamRepository
#[derive(Clone)]
pub struct PgStreamRepository {
    pool: PgPool,
}

impl PgStreamRepository {
    /// Create a new PgStreamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StreamRepository for PgStreamRepository {
    #[instrument(skip(self))]
    async fn stream(&self, username: &Username, limit: i64) -> RepoResult<Vec<Image>> {
        let following = sqlx::query_scalar::<_, Vec<String>>(
            r"
            SELECT ARRAY(SELECT f.target FROM user_following f
                         WHERE f.username = u.username ORDER BY f.id)
            FROM users u
            WHERE u.username = $1
            ",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(username))?;

        if following.is_empty() || limit <= 0 {
            debug!("Nothing to stream");
            return Ok(Vec::new());
        }

        // Duplicate entries in `following` do not duplicate images: ANY is a set test
        let sql = format!(
            r"
            SELECT {IMAGE_COLUMNS}
            FROM images i
            WHERE i.username = ANY($1)
            ORDER BY i.created_at DESC, i.id DESC
            LIMIT $2
            "
        );

        let results = sqlx::query_as::<_, ImageModel>(&sql)
            .bind(&following)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(
            followed = following.len(),
            images = results.len(),
            "Stream assembled"
        );

        Ok(results.into_iter().map(Image::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgStreamRepository>();
    }
}
