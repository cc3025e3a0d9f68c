//! Image service
//!
//! Handles uploads, removal, likes and comments.

use photo_core::value_objects::{CommentText, ImageId, ImageUrl, Username};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{CommentRequest, ImageResponse, UploadImageRequest, UploadImageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Image service
///
/// Image ids arrive as strings (path segments) and are parsed here.
pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    /// Create a new ImageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store metadata for an uploaded image
    ///
    /// The owner is not checked for existence.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn upload_image(
        &self,
        request: UploadImageRequest,
    ) -> ServiceResult<UploadImageResponse> {
        request.validate()?;
        let owner = Username::parse(request.username)?;
        let image_url = ImageUrl::parse(request.image_url)?;

        let image_id = self
            .ctx
            .run("upload_image", self.ctx.image_repo().insert(&image_url, &owner))
            .await?;

        info!(image_id = %image_id, "Image uploaded");

        Ok(UploadImageResponse {
            username: owner.into_inner(),
            image_id,
        })
    }

    /// Delete an image; deleting an unknown id succeeds
    #[instrument(skip(self))]
    pub async fn remove_image(&self, image_id: &str) -> ServiceResult<()> {
        let id = parse_image_id(image_id)?;
        let removed = self
            .ctx
            .run("remove_image", self.ctx.image_repo().delete(id))
            .await?;

        if removed {
            info!(image_id = %id, "Image removed");
        } else {
            debug!(image_id = %id, "Image already absent");
        }
        Ok(())
    }

    /// Add one like
    #[instrument(skip(self))]
    pub async fn like(&self, image_id: &str) -> ServiceResult<()> {
        let id = parse_image_id(image_id)?;
        self.ctx
            .run("like", self.ctx.image_repo().add_like(id))
            .await?;

        debug!(image_id = %id, "Image liked");
        Ok(())
    }

    /// Remove one like; the counter is not clamped at zero
    #[instrument(skip(self))]
    pub async fn unlike(&self, image_id: &str) -> ServiceResult<()> {
        let id = parse_image_id(image_id)?;
        self.ctx
            .run("unlike", self.ctx.image_repo().remove_like(id))
            .await?;

        debug!(image_id = %id, "Image unliked");
        Ok(())
    }

    /// Append a comment
    #[instrument(skip(self, request))]
    pub async fn comment(&self, image_id: &str, request: CommentRequest) -> ServiceResult<()> {
        let (id, text) = parse_comment(image_id, request)?;
        self.ctx
            .run("comment", self.ctx.image_repo().add_comment(id, &text))
            .await?;

        info!(image_id = %id, "Comment added");
        Ok(())
    }

    /// Remove every comment equal to the given text
    #[instrument(skip(self, request))]
    pub async fn uncomment(&self, image_id: &str, request: CommentRequest) -> ServiceResult<()> {
        let (id, text) = parse_comment(image_id, request)?;
        self.ctx
            .run("uncomment", self.ctx.image_repo().remove_comment(id, &text))
            .await?;

        info!(image_id = %id, "Comment removed");
        Ok(())
    }

    /// Get one image
    #[instrument(skip(self))]
    pub async fn get_image(&self, image_id: &str) -> ServiceResult<ImageResponse> {
        let id = parse_image_id(image_id)?;
        let image = self
            .ctx
            .run("get_image", self.ctx.image_repo().find(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Image", id.to_string()))?;

        Ok(ImageResponse::from(image))
    }

    /// All images owned by a user, newest first
    #[instrument(skip(self))]
    pub async fn user_images(&self, username: &str) -> ServiceResult<Vec<ImageResponse>> {
        let owner = Username::parse(username)?;
        let images = self
            .ctx
            .run("user_images", self.ctx.image_repo().find_by_owner(&owner))
            .await?;

        Ok(images.into_iter().map(ImageResponse::from).collect())
    }
}

fn parse_image_id(image_id: &str) -> ServiceResult<ImageId> {
    ImageId::parse(image_id).map_err(|e| ServiceError::Domain(e.into()))
}

fn parse_comment(image_id: &str, request: CommentRequest) -> ServiceResult<(ImageId, CommentText)> {
    request.validate()?;
    Ok((parse_image_id(image_id)?, CommentText::parse(request.comment)?))
}
