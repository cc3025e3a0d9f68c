//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in photo-core.
//! Relationship sets and comments live in child tables, so every mutation is a
//! single statement (or one transaction for rename) and concurrent writers
//! never overwrite each other.

pub(crate) mod error;
mod health;
mod image;
mod stream;
mod user;

pub use health::PgStoreHealth;
pub use image::PgImageRepository;
pub use stream::PgStreamRepository;
pub use user::PgUserRepository;
