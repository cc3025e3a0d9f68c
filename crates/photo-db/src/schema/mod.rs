//! Schema initializer
//!
//! `ensure_schema` brings an empty or partially initialized database up to the
//! latest schema version. It is safe to call on every startup and from several
//! processes at once: the embedded migrator takes an advisory lock, applies
//! each pending migration in its own transaction and skips versions already
//! recorded in `_sqlx_migrations`.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use photo_core::{DomainError, RepoResult};

use crate::repositories::error::map_db_error;

/// Migrations embedded from `crates/photo-db/migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Outcome of a schema initialization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    /// Whether the users table existed before this run
    pub users_table_existed: bool,
    /// Whether the images table existed before this run
    pub images_table_existed: bool,
    /// Versions that were not recorded before this run, ascending
    pub applied: Vec<i64>,
    /// Version the database is at after this run
    pub current_version: i64,
}

impl SchemaReport {
    /// True when nothing had to be changed
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Highest version known to this build
pub fn latest_version() -> i64 {
    MIGRATOR.iter().map(|m| m.version).max().unwrap_or(0)
}

/// Ensure all tables exist, applying pending schema versions
#[instrument(name = "ensure_schema", skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> RepoResult<SchemaReport> {
    let users_table_existed = table_exists(pool, "users").await?;
    let images_table_existed = table_exists(pool, "images").await?;
    debug!(users_table_existed, images_table_existed, "Inspected store metadata");

    let before = recorded_versions(pool).await?;
    MIGRATOR.run(pool).await.map_err(map_migrate_error)?;
    let after = recorded_versions(pool).await?;

    let applied: Vec<i64> = after
        .iter()
        .copied()
        .filter(|v| !before.contains(v))
        .collect();
    let current_version = after.last().copied().unwrap_or(0);

    if applied.is_empty() {
        debug!(current_version, "Schema already up to date");
    } else {
        info!(?applied, current_version, "Schema initialized");
    }

    Ok(SchemaReport {
        users_table_existed,
        images_table_existed,
        applied,
        current_version,
    })
}

/// Look a table up in the store catalog (honors `search_path`)
async fn table_exists(pool: &PgPool, name: &str) -> RepoResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT to_regclass($1::text) IS NOT NULL")
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(map_db_error)
}

/// Successfully applied versions, ascending
async fn recorded_versions(pool: &PgPool) -> RepoResult<Vec<i64>> {
    if !table_exists(pool, "_sqlx_migrations").await? {
        return Ok(Vec::new());
    }

    sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
        .fetch_all(pool)
        .await
        .map_err(map_db_error)
}

fn map_migrate_error(e: MigrateError) -> DomainError {
    match e {
        MigrateError::Execute(e) => map_db_error(e),
        other => DomainError::DatabaseError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_core::ErrorKind;

    #[test]
    fn test_versions_strictly_increasing() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(versions.first(), Some(&1));
    }

    #[test]
    fn test_latest_version() {
        assert_eq!(latest_version(), 2);
    }

    #[test]
    fn test_migrations_are_replayable() {
        for migration in MIGRATOR.iter() {
            assert!(
                migration.sql.contains("IF NOT EXISTS"),
                "v{} is not replayable",
                migration.version
            );
        }
    }

    #[test]
    fn test_report_noop() {
        let report = SchemaReport {
            users_table_existed: true,
            images_table_existed: true,
            applied: vec![],
            current_version: latest_version(),
        };
        assert!(report.is_noop());
    }

    #[test]
    fn test_map_migrate_error() {
        let err = map_migrate_error(MigrateError::Execute(sqlx::Error::PoolTimedOut));
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);

        let err = map_migrate_error(MigrateError::VersionMissing(3));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
