//! Merit entity - a commendation awarded to a user

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Merit record
///
/// `points` may be negative for demerits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merit {
    pub id: Option<EntityId>,
    pub user_id: Option<EntityId>,
    pub admin_id: Option<EntityId>,
    pub reason: Option<String>,
    pub points: Option<i32>,
    pub merit_date: Option<i64>,
}

impl Merit {
    /// Create a new Merit with required fields
    pub fn new(user_id: EntityId, admin_id: EntityId, reason: String, points: i32) -> Self {
        Self {
            user_id: Some(user_id),
            admin_id: Some(admin_id),
            reason: Some(reason),
            points: Some(points),
            ..Self::default()
        }
    }
}

impl Entity for Merit {
    const KIND: EntityKind = EntityKind::Merit;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
