//! MissionUserView entity - grants a single user sight of a mission

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Mission visibility grant for a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionUserView {
    pub id: Option<EntityId>,
    pub mission_id: Option<EntityId>,
    pub user_id: Option<EntityId>,
}

impl MissionUserView {
    /// Create a new grant with required fields
    pub fn new(mission_id: EntityId, user_id: EntityId) -> Self {
        Self {
            mission_id: Some(mission_id),
            user_id: Some(user_id),
            ..Self::default()
        }
    }
}

impl Entity for MissionUserView {
    const KIND: EntityKind = EntityKind::MissionUserView;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
