//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! Writes bind value objects directly, so there are no insert/update structs.

mod image;
mod user;
