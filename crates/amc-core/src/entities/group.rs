//! Group entity - a named collection of users

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Group record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub founded_date: Option<i64>,
}

impl Group {
    /// Create a new Group with required fields
    pub fn new(name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

impl Entity for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
