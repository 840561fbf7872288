//! User entity <-> model mapper

use amc_core::entities::User;
use amc_core::value_objects::EntityId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Some(EntityId::new(model.id)),
            username: model.username,
            password_hash: model.password_hash,
            email: model.email,
            admin: model.admin,
            join_date: model.join_date,
            last_active: model.last_active,
        }
    }
}
