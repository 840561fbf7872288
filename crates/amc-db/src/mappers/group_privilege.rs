//! GroupPrivilege entity <-> model mapper

use amc_core::entities::GroupPrivilege;
use amc_core::value_objects::EntityId;

use crate::models::GroupPrivilegeModel;

/// Convert GroupPrivilegeModel to GroupPrivilege entity
impl From<GroupPrivilegeModel> for GroupPrivilege {
    fn from(model: GroupPrivilegeModel) -> Self {
        GroupPrivilege {
            id: Some(EntityId::new(model.id)),
            group_id: model.group_id.map(EntityId::new),
            privilege: model.privilege,
            granted_date: model.granted_date,
        }
    }
}
