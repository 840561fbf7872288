//! Ban entity - an exclusion placed on a user by an admin

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Ban record
///
/// `user_id` is the banned user and `admin_id` the issuing admin; both are
/// references into the users table. `ban_date` and `expiry` are epoch
/// seconds, with [`Ban::NO_EXPIRY`] marking a permanent ban.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ban {
    pub id: Option<EntityId>,
    pub user_id: Option<EntityId>,
    pub admin_id: Option<EntityId>,
    pub reason: Option<String>,
    pub ban_date: Option<i64>,
    pub active: Option<bool>,
    pub expiry: Option<i64>,
}

impl Ban {
    /// Expiry value for a ban that never lapses
    pub const NO_EXPIRY: i64 = -1;

    /// Create a new Ban with required fields
    pub fn new(user_id: EntityId, admin_id: EntityId, reason: String) -> Self {
        Self {
            user_id: Some(user_id),
            admin_id: Some(admin_id),
            reason: Some(reason),
            active: Some(true),
            ..Self::default()
        }
    }

    /// Check if the ban is in force at `now` (epoch seconds)
    ///
    /// A ban is in force when its active flag is set and its expiry has
    /// not passed. A missing expiry counts as permanent.
    pub fn in_force(&self, now: i64) -> bool {
        self.active == Some(true)
            && match self.expiry {
                None | Some(Self::NO_EXPIRY) => true,
                Some(t) => t > now,
            }
    }
}

impl Entity for Ban {
    const KIND: EntityKind = EntityKind::Ban;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
