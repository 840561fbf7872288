//! Ban entity <-> model mapper

use amc_core::entities::Ban;
use amc_core::value_objects::EntityId;

use crate::models::BanModel;

/// Convert BanModel to Ban entity
impl From<BanModel> for Ban {
    fn from(model: BanModel) -> Self {
        Ban {
            id: Some(EntityId::new(model.id)),
            user_id: model.user_id.map(EntityId::new),
            admin_id: model.admin_id.map(EntityId::new),
            reason: model.reason,
            ban_date: model.ban_date,
            active: model.active,
            expiry: model.expiry,
        }
    }
}
