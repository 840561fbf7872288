//! Traits - contracts between the domain and its backends

mod entity;
mod store;

pub use entity::Entity;
pub use store::{EntityStore, RepoResult};
