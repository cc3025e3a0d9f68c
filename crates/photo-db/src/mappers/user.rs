//! User entity <-> model mapper

use photo_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            username: model.username,
            following: model.following,
            banned: model.banned,
            created_at: model.created_at,
        }
    }
}
