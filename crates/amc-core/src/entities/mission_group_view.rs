//! MissionGroupView entity - grants a group sight of a mission

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Mission visibility grant for a group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionGroupView {
    pub id: Option<EntityId>,
    pub mission_id: Option<EntityId>,
    pub group_id: Option<EntityId>,
}

impl MissionGroupView {
    /// Create a new grant with required fields
    pub fn new(mission_id: EntityId, group_id: EntityId) -> Self {
        Self {
            mission_id: Some(mission_id),
            group_id: Some(group_id),
            ..Self::default()
        }
    }
}

impl Entity for MissionGroupView {
    const KIND: EntityKind = EntityKind::MissionGroupView;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
