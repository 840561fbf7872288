//! UserGroup entity - membership of a user in a group

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// User-group membership record
///
/// A full record rather than a bare join row: memberships have their own
/// identity and a joined timestamp, and can be selected and deleted like
/// any other record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroup {
    pub id: Option<EntityId>,
    pub user_id: Option<EntityId>,
    pub group_id: Option<EntityId>,
    pub joined_date: Option<i64>,
}

impl UserGroup {
    /// Create a new membership with required fields
    pub fn new(user_id: EntityId, group_id: EntityId) -> Self {
        Self {
            user_id: Some(user_id),
            group_id: Some(group_id),
            ..Self::default()
        }
    }
}

impl Entity for UserGroup {
    const KIND: EntityKind = EntityKind::UserGroup;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
