//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Every model mirrors its table exactly: `id` plus nullable payload
//! columns. Conversion into the domain entities lives in `mappers`.

mod admin_log;
mod ban;
mod group;
mod group_privilege;
mod intelligence;
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

pub use admin_log::AdminLogModel;
pub use ban::BanModel;
pub use group::GroupModel;
pub use group_privilege::GroupPrivilegeModel;
pub use intelligence::IntelligenceModel;
pub use merit::MeritModel;
pub use message::MessageModel;
pub use mission::MissionModel;
pub use mission_group_view::MissionGroupViewModel;
pub use mission_note::MissionNoteModel;
pub use mission_user_view::MissionUserViewModel;
pub use news::NewsModel;
pub use notification::NotificationModel;
pub use user::UserModel;
pub use user_group::UserGroupModel;
pub use user_mission::UserMissionModel;
