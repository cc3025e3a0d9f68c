//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use photo_core::entities::User;
use photo_core::traits::{RepoResult, UserRepository};
use photo_core::value_objects::Username;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found, username_taken};

/// Child table holding one row per set member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelationTable {
    Following,
    Banned,
}

impl RelationTable {
    fn table(self) -> &'static str {
        match self {
            Self::Following => "user_following",
            Self::Banned => "user_banned",
        }
    }
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a member row, failing if the owner does not exist
    async fn insert_member(
        &self,
        relation: RelationTable,
        username: &Username,
        target: &Username,
    ) -> RepoResult<()> {
        // Single statement: the owner check and the insert cannot interleave
        // with another writer.
        let sql = format!(
            r"
            INSERT INTO {} (username, target)
            SELECT username, $2 FROM users WHERE username = $1
            ",
            relation.table()
        );

        let result = sqlx::query(&sql)
            .bind(username.as_str())
            .bind(target.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(username));
        }

        Ok(())
    }

    /// Delete every member row equal to `target`, failing if the owner does not exist
    async fn delete_members(
        &self,
        relation: RelationTable,
        username: &Username,
        target: &Username,
    ) -> RepoResult<u64> {
        let sql = format!(
            r"
            WITH removed AS (
                DELETE FROM {} WHERE username = $1 AND target = $2
                RETURNING 1
            )
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1),
                   (SELECT COUNT(*) FROM removed)
            ",
            relation.table()
        );

        let (owner_exists, removed) = sqlx::query_as::<_, (bool, i64)>(&sql)
            .bind(username.as_str())
            .bind(target.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if !owner_exists {
            return Err(user_not_found(username));
        }

        Ok(removed as u64)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn exists(&self, username: &Username) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, username: &Username) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (username) VALUES ($1)
            ",
        )
        .bind(username.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || username_taken(username)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn rename(&self, old: &Username, new: &Username) -> RepoResult<()> {
        // Dropping `tx` on any early return rolls the whole rename back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Relationship rows follow through ON UPDATE CASCADE
        let result = sqlx::query(
            r"
            UPDATE users SET username = $2 WHERE username = $1
            ",
        )
        .bind(old.as_str())
        .bind(new.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || username_taken(new)))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(old));
        }

        let images = sqlx::query(
            r"
            UPDATE images SET username = $2 WHERE username = $1
            ",
        )
        .bind(old.as_str())
        .bind(new.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(
            old = %old,
            new = %new,
            images = images.rows_affected(),
            "User renamed"
        );

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, username: &Username) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.username,
                   ARRAY(SELECT f.target FROM user_following f
                         WHERE f.username = u.username ORDER BY f.id) AS following,
                   ARRAY(SELECT b.target FROM user_banned b
                         WHERE b.username = u.username ORDER BY b.id) AS banned,
                   u.created_at
            FROM users u
            WHERE u.username = $1
            ",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn add_following(&self, username: &Username, target: &Username) -> RepoResult<()> {
        self.insert_member(RelationTable::Following, username, target)
            .await
    }

    #[instrument(skip(self))]
    async fn remove_following(&self, username: &Username, target: &Username) -> RepoResult<()> {
        let removed = self
            .delete_members(RelationTable::Following, username, target)
            .await?;
        debug!(removed, "Following entries removed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_banned(&self, username: &Username, target: &Username) -> RepoResult<()> {
        self.insert_member(RelationTable::Banned, username, target)
            .await
    }

    #[instrument(skip(self))]
    async fn remove_banned(&self, username: &Username, target: &Username) -> RepoResult<()> {
        let removed = self
            .delete_members(RelationTable::Banned, username, target)
            .await?;
        debug!(removed, "Banned entries removed");
        Ok(())
    }
}
