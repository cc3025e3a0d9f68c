//! # photo-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `photo-core`. It handles:
//!
//! - Connection pool management
//! - Schema initialization (`schema::ensure_schema`)
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use photo_db::pool::{create_pool, DatabaseConfig};
//! use photo_db::repositories::PgUserRepository;
//! use photo_db::schema::ensure_schema;
//! use photo_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: "postgres://localhost/photo_db".to_string(),
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgImageRepository, PgStoreHealth, PgStreamRepository, PgUserRepository};
pub use schema::{ensure_schema, SchemaReport};
