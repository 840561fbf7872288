//! Domain entities - the record kinds the AMC store manages
//!
//! Every entity follows the same shape: an optional storage identity plus
//! optional payload fields, structural equality, and a `Default` that is
//! the blank state. The association kinds (UserGroup, GroupPrivilege,
//! UserMission, the mission view links) are full records with identities
//! of their own, not bare join rows.

mod admin_log;
mod ban;
mod group;
mod group_privilege;
mod intelligence;
mod kind;
mod merit;
mod message;
mod mission;
mod mission_group_view;
mod mission_note;
mod mission_user_view;
mod news;
mod notification;
mod user;
mod user_group;
mod user_mission;

pub use admin_log::AdminLog;
pub use ban::Ban;
pub use group::Group;
pub use group_privilege::GroupPrivilege;
pub use intelligence::Intelligence;
pub use kind::EntityKind;
pub use merit::Merit;
pub use message::Message;
pub use mission::Mission;
pub use mission_group_view::MissionGroupView;
pub use mission_note::MissionNote;
pub use mission_user_view::MissionUserView;
pub use news::News;
pub use notification::Notification;
pub use user::User;
pub use user_group::UserGroup;
pub use user_mission::UserMission;
