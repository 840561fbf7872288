//! UserGroup entity <-> model mapper

use amc_core::entities::UserGroup;
use amc_core::value_objects::EntityId;

use crate::models::UserGroupModel;

/// Convert UserGroupModel to UserGroup entity
impl From<UserGroupModel> for UserGroup {
    fn from(model: UserGroupModel) -> Self {
        UserGroup {
            id: Some(EntityId::new(model.id)),
            user_id: model.user_id.map(EntityId::new),
            group_id: model.group_id.map(EntityId::new),
            joined_date: model.joined_date,
        }
    }
}
