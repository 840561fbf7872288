//! # amc-core
//!
//! Domain layer containing the AMC record types, identity value object, store
//! contracts, and the domain error taxonomy. This crate has zero dependencies
//! on infrastructure (database, async runtime pools, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AdminLog, Ban, EntityKind, Group, GroupPrivilege, Intelligence, Merit, Message, Mission,
    MissionGroupView, MissionNote, MissionUserView, News, Notification, User, UserGroup,
    UserMission,
};
pub use error::DomainError;
pub use traits::{Entity, EntityStore, RepoResult};
pub use value_objects::{EntityId, EntityIdParseError};
