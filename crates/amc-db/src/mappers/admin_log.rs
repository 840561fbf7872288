//! AdminLog entity <-> model mapper

use amc_core::entities::AdminLog;
use amc_core::value_objects::EntityId;

use crate::models::AdminLogModel;

/// Convert AdminLogModel to AdminLog entity
impl From<AdminLogModel> for AdminLog {
    fn from(model: AdminLogModel) -> Self {
        AdminLog {
            id: Some(EntityId::new(model.id)),
            admin_id: model.admin_id.map(EntityId::new),
            action: model.action,
            target_kind: model.target_kind,
            target_id: model.target_id.map(EntityId::new),
            detail: model.detail,
            log_date: model.log_date,
        }
    }
}
