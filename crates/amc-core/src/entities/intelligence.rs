//! Intelligence entity - an intel report filed by a user

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Intelligence report record
///
/// `classification` is free text ("open", "staff", ...); this layer stores
/// it without interpreting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intelligence {
    pub id: Option<EntityId>,
    pub author_id: Option<EntityId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub intel_date: Option<i64>,
    pub classification: Option<String>,
}

impl Intelligence {
    /// Create a new Intelligence report with required fields
    pub fn new(author_id: EntityId, title: String, body: String) -> Self {
        Self {
            author_id: Some(author_id),
            title: Some(title),
            body: Some(body),
            ..Self::default()
        }
    }
}

impl Entity for Intelligence {
    const KIND: EntityKind = EntityKind::Intelligence;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
