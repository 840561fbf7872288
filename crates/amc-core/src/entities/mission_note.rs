//! MissionNote entity - a comment attached to a mission

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Mission note record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionNote {
    pub id: Option<EntityId>,
    pub mission_id: Option<EntityId>,
    pub author_id: Option<EntityId>,
    pub body: Option<String>,
    pub note_date: Option<i64>,
}

impl MissionNote {
    /// Create a new MissionNote with required fields
    pub fn new(mission_id: EntityId, author_id: EntityId, body: String) -> Self {
        Self {
            mission_id: Some(mission_id),
            author_id: Some(author_id),
            body: Some(body),
            ..Self::default()
        }
    }
}

impl Entity for MissionNote {
    const KIND: EntityKind = EntityKind::MissionNote;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
