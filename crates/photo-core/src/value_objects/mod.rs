//! Value objects - immutable types that represent domain concepts

mod comment;
mod image_id;
mod image_url;
mod username;

pub use comment::CommentText;
pub use image_id::{ImageId, ImageIdParseError};
pub use image_url::ImageUrl;
pub use username::Username;
