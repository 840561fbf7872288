//! UserMission entity - assignment of a user to a mission

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// User-mission assignment record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMission {
    pub id: Option<EntityId>,
    pub user_id: Option<EntityId>,
    pub mission_id: Option<EntityId>,
    pub assigned_date: Option<i64>,
    pub completed: Option<bool>,
}

impl UserMission {
    /// Create a new assignment with required fields
    pub fn new(user_id: EntityId, mission_id: EntityId) -> Self {
        Self {
            user_id: Some(user_id),
            mission_id: Some(mission_id),
            completed: Some(false),
            ..Self::default()
        }
    }
}

impl Entity for UserMission {
    const KIND: EntityKind = EntityKind::UserMission;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
