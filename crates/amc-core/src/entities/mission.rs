//! Mission entity - an operation users can be assigned to

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Mission record
///
/// `start_date` and `end_date` are epoch seconds bounding the operation
/// window; either may be absent for open-ended missions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mission {
    pub id: Option<EntityId>,
    pub title: Option<String>,
    pub briefing: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub active: Option<bool>,
}

impl Mission {
    /// Create a new Mission with required fields
    pub fn new(title: String, briefing: String) -> Self {
        Self {
            title: Some(title),
            briefing: Some(briefing),
            active: Some(true),
            ..Self::default()
        }
    }

    /// Check if the mission window contains `now` (epoch seconds)
    ///
    /// Missing bounds are open: no start means already started, no end
    /// means never over. The active flag is checked first.
    pub fn is_open(&self, now: i64) -> bool {
        if self.active != Some(true) {
            return false;
        }
        let started = self.start_date.is_none_or(|t| t <= now);
        let ended = self.end_date.is_some_and(|t| t < now);
        started && !ended
    }
}

impl Entity for Mission {
    const KIND: EntityKind = EntityKind::Mission;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
