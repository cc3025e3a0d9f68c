//! Startup wiring
//!
//! Turns an `AppConfig` into a ready `ServiceContext`: connect the pool, bring
//! the schema up to date, then build the PostgreSQL repositories.

use std::sync::Arc;

use photo_common::{try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig};
use photo_db::{
    create_pool, ensure_schema, DatabaseConfig, PgImageRepository, PgStoreHealth,
    PgStreamRepository, PgUserRepository,
};
use tracing::{error, info};

use crate::services::{ServiceContext, ServiceContextBuilder};

/// Install the tracing subscriber configured for this environment
pub fn init_telemetry(config: &AppConfig) -> AppResult<()> {
    let tracing_config = TracingConfig::for_environment(config.app.env, &config.logging);
    try_init_tracing_with_config(&tracing_config)?;
    Ok(())
}

/// Initialize all dependencies and create the ServiceContext
///
/// A schema failure is fatal: the caller should abort startup.
pub async fn bootstrap(config: &AppConfig) -> AppResult<ServiceContext> {
    info!(app = %config.app.name, env = ?config.app.env, "Starting photo core");

    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let report = ensure_schema(&pool).await.map_err(|e| {
        error!(error = %e, "Schema initialization failed");
        e
    })?;
    info!(
        version = report.current_version,
        applied = report.applied.len(),
        "Schema ready"
    );

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .image_repo(Arc::new(PgImageRepository::new(pool.clone())))
        .stream_repo(Arc::new(PgStreamRepository::new(pool.clone())))
        .store_health(Arc::new(PgStoreHealth::new(pool)))
        .operation_timeout(config.store.operation_timeout())
        .build()?;

    Ok(service_context)
}

/// Load configuration from the environment and bootstrap
pub async fn bootstrap_from_env() -> AppResult<ServiceContext> {
    let config = AppConfig::from_env()?;
    bootstrap(&config).await
}
