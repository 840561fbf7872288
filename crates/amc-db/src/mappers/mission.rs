//! Mission entity <-> model mapper

use amc_core::entities::Mission;
use amc_core::value_objects::EntityId;

use crate::models::MissionModel;

/// Convert MissionModel to Mission entity
impl From<MissionModel> for Mission {
    fn from(model: MissionModel) -> Self {
        Mission {
            id: Some(EntityId::new(model.id)),
            title: model.title,
            briefing: model.briefing,
            start_date: model.start_date,
            end_date: model.end_date,
            active: model.active,
        }
    }
}
