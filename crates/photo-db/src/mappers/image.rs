//! Image entity <-> model mapper

use photo_core::entities::Image;
use photo_core::value_objects::ImageId;

use crate::models::ImageModel;

/// Convert ImageModel to Image entity
impl From<ImageModel> for Image {
    fn from(model: ImageModel) -> Self {
        Image {
            id: ImageId::new(model.id),
            image_url: model.image_url,
            username: model.username,
            likes: model.likes,
            comments: model.comments,
            created_at: model.created_at,
        }
    }
}
