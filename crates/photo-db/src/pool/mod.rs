//! Database connection pool management
//!
//! Repositories share one `PgPool`; cloning it is cheap.

mod postgres;

pub use postgres::{create_pool, DatabaseConfig};

pub use sqlx::postgres::PgPool;
