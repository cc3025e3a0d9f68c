//! Business logic services
//!
//! Each service parses raw caller input into domain value objects, runs the
//! store operation under the context's deadline and maps results to DTOs.

pub mod context;
pub mod error;
pub mod health;
pub mod image;
pub mod stream;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_OPERATION_TIMEOUT};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use image::ImageService;
pub use stream::StreamService;
pub use user::UserService;
