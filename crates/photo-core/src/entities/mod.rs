//! Domain entities - core business objects

mod image;
mod user;

pub use image::Image;
pub use user::User;
