//! Group entity <-> model mapper

use amc_core::entities::Group;
use amc_core::value_objects::EntityId;

use crate::models::GroupModel;

/// Convert GroupModel to Group entity
impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: Some(EntityId::new(model.id)),
            name: model.name,
            description: model.description,
            founded_date: model.founded_date,
        }
    }
}
