//! Notification entity - a one-line alert shown to a user

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Notification record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub id: Option<EntityId>,
    pub user_id: Option<EntityId>,
    pub body: Option<String>,
    pub note_date: Option<i64>,
    pub seen: Option<bool>,
}

impl Notification {
    /// Create a new Notification with required fields
    pub fn new(user_id: EntityId, body: String) -> Self {
        Self {
            user_id: Some(user_id),
            body: Some(body),
            seen: Some(false),
            ..Self::default()
        }
    }
}

impl Entity for Notification {
    const KIND: EntityKind = EntityKind::Notification;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
