//! Merit entity <-> model mapper

use amc_core::entities::Merit;
use amc_core::value_objects::EntityId;

use crate::models::MeritModel;

/// Convert MeritModel to Merit entity
impl From<MeritModel> for Merit {
    fn from(model: MeritModel) -> Self {
        Merit {
            id: Some(EntityId::new(model.id)),
            user_id: model.user_id.map(EntityId::new),
            admin_id: model.admin_id.map(EntityId::new),
            reason: model.reason,
            points: model.points,
            merit_date: model.merit_date,
        }
    }
}
