//! Entity kind - tags record types in errors and reference metadata

use std::fmt;

/// The record kinds the AMC store manages.
///
/// Used in error messages ("Cannot store a blank Ban") and in the reference
/// metadata that names which kind a foreign-key column points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Group,
    Ban,
    Merit,
    News,
    Mission,
    Intelligence,
    Message,
    Notification,
    AdminLog,
    MissionNote,
    UserGroup,
    GroupPrivilege,
    UserMission,
    MissionGroupView,
    MissionUserView,
}

impl EntityKind {
    /// Kind name as it appears in error messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Group => "Group",
            Self::Ban => "Ban",
            Self::Merit => "Merit",
            Self::News => "News",
            Self::Mission => "Mission",
            Self::Intelligence => "Intelligence",
            Self::Message => "Message",
            Self::Notification => "Notification",
            Self::AdminLog => "AdminLog",
            Self::MissionNote => "MissionNote",
            Self::UserGroup => "UserGroup",
            Self::GroupPrivilege => "GroupPrivilege",
            Self::UserMission => "UserMission",
            Self::MissionGroupView => "MissionGroupView",
            Self::MissionUserView => "MissionUserView",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
