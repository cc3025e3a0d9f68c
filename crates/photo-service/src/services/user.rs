//! User service
//!
//! Handles registration, renames and the following/banned relationships.

use photo_core::value_objects::Username;
use photo_core::DomainError;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse, RelationRequest, RenameUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check whether a username is registered
    #[instrument(skip(self))]
    pub async fn username_exists(&self, username: &str) -> ServiceResult<bool> {
        let username = Username::parse(username)?;
        self.ctx
            .run("username_exists", self.ctx.user_repo().exists(&username))
            .await
    }

    /// Register a new username
    #[instrument(skip(self))]
    pub async fn create_user(&self, username: &str) -> ServiceResult<()> {
        let username = Username::parse(username)?;
        self.ctx
            .run("create_user", self.ctx.user_repo().create(&username))
            .await?;

        info!(username = %username, "User created");
        Ok(())
    }

    /// Log in, registering the username first if it is new
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request.validate()?;
        let username = Username::parse(request.username)?;

        if self
            .ctx
            .run("login", self.ctx.user_repo().exists(&username))
            .await?
        {
            debug!("Existing account");
            return Ok(LoginResponse::login(username.into_inner()));
        }

        match self
            .ctx
            .run("login", self.ctx.user_repo().create(&username))
            .await
        {
            Ok(()) => {
                info!(username = %username, "User signed up");
                Ok(LoginResponse::signup(username.into_inner()))
            }
            // Lost a race with a concurrent signup of the same name
            Err(ServiceError::Domain(DomainError::UsernameTaken(_))) => {
                debug!("Account created concurrently");
                Ok(LoginResponse::login(username.into_inner()))
            }
            Err(e) => Err(e),
        }
    }

    /// Rename a user and re-own all of its images
    #[instrument(skip(self, request), fields(new_username = %request.username))]
    pub async fn rename_user(&self, username: &str, request: RenameUserRequest) -> ServiceResult<()> {
        request.validate()?;
        let old = Username::parse(username)?;
        let new = Username::parse(request.username)?;

        if old == new {
            debug!("Rename to the same username");
            return self.get_user(old.as_str()).await.map(|_| ());
        }

        self.ctx
            .run("rename_user", self.ctx.user_repo().rename(&old, &new))
            .await?;

        info!(old = %old, new = %new, "Username changed");
        Ok(())
    }

    /// Get a user with its following and banned sets
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> ServiceResult<UserResponse> {
        let username = Username::parse(username)?;
        let user = self
            .ctx
            .run("get_user", self.ctx.user_repo().find(&username))
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username.as_str()))?;

        Ok(UserResponse::from(user))
    }

    /// Follow another user
    #[instrument(skip(self, request), fields(target = %request.username))]
    pub async fn follow(&self, username: &str, request: RelationRequest) -> ServiceResult<()> {
        let (username, target) = parse_relation(username, request)?;
        self.ctx
            .run("follow", self.ctx.user_repo().add_following(&username, &target))
            .await?;

        info!(username = %username, target = %target, "User followed");
        Ok(())
    }

    /// Stop following another user
    #[instrument(skip(self, request), fields(target = %request.username))]
    pub async fn unfollow(&self, username: &str, request: RelationRequest) -> ServiceResult<()> {
        let (username, target) = parse_relation(username, request)?;
        self.ctx
            .run(
                "unfollow",
                self.ctx.user_repo().remove_following(&username, &target),
            )
            .await?;

        info!(username = %username, target = %target, "User unfollowed");
        Ok(())
    }

    /// Ban another user
    ///
    /// Bookkeeping only: bans do not filter streams or block follows.
    #[instrument(skip(self, request), fields(target = %request.username))]
    pub async fn ban(&self, username: &str, request: RelationRequest) -> ServiceResult<()> {
        let (username, target) = parse_relation(username, request)?;
        self.ctx
            .run("ban", self.ctx.user_repo().add_banned(&username, &target))
            .await?;

        info!(username = %username, target = %target, "User banned");
        Ok(())
    }

    /// Lift a ban
    #[instrument(skip(self, request), fields(target = %request.username))]
    pub async fn unban(&self, username: &str, request: RelationRequest) -> ServiceResult<()> {
        let (username, target) = parse_relation(username, request)?;
        self.ctx
            .run("unban", self.ctx.user_repo().remove_banned(&username, &target))
            .await?;

        info!(username = %username, target = %target, "User unbanned");
        Ok(())
    }
}

fn parse_relation(username: &str, request: RelationRequest) -> ServiceResult<(Username, Username)> {
    request.validate()?;
    Ok((Username::parse(username)?, Username::parse(request.username)?))
}
