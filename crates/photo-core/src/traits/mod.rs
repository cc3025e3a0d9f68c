//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ImageRepository, RepoResult, StoreHealth, StreamRepository, UserRepository, STREAM_LIMIT,
};
