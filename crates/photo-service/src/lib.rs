//! # photo-service
//!
//! Application layer containing services, DTOs and startup wiring.
//!
//! ```rust,ignore
//! use photo_service::{bootstrap_from_env, StreamService};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = bootstrap_from_env().await?;
//!     let stream = StreamService::new(&ctx).get_stream("alice").await?;
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod dto;
pub mod services;

pub use bootstrap::{bootstrap, bootstrap_from_env, init_telemetry};
pub use services::{
    HealthService, ImageService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StreamService, UserService,
};
