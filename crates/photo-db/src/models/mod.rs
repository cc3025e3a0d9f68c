//! Database models - SQLx-compatible structs for PostgreSQL rows

mod image;
mod user;

pub use image::ImageModel;
pub use user::UserModel;
