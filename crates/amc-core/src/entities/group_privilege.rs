//! GroupPrivilege entity - a named privilege granted to a group

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Group privilege record
///
/// `privilege` is a free-form name ("news.post", "missions.manage", ...);
/// interpretation belongs to the authorization layer above.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPrivilege {
    pub id: Option<EntityId>,
    pub group_id: Option<EntityId>,
    pub privilege: Option<String>,
    pub granted_date: Option<i64>,
}

impl GroupPrivilege {
    /// Create a new GroupPrivilege with required fields
    pub fn new(group_id: EntityId, privilege: String) -> Self {
        Self {
            group_id: Some(group_id),
            privilege: Some(privilege),
            ..Self::default()
        }
    }
}

impl Entity for GroupPrivilege {
    const KIND: EntityKind = EntityKind::GroupPrivilege;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
