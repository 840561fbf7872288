//! User entity - a member account

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// User account record
///
/// `join_date` and `last_active` are epoch seconds; both stay `None` until
/// the caller sets them. The password is stored only as a hash computed
/// upstream of this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: Option<EntityId>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
    pub join_date: Option<i64>,
    pub last_active: Option<i64>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(username: String, email: String) -> Self {
        Self {
            username: Some(username),
            email: Some(email),
            admin: Some(false),
            ..Self::default()
        }
    }

    /// Check if the account has the site-admin flag
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.admin == Some(true)
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
