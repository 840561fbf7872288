//! UserMission entity <-> model mapper

use amc_core::entities::UserMission;
use amc_core::value_objects::EntityId;

use crate::models::UserMissionModel;

/// Convert UserMissionModel to UserMission entity
impl From<UserMissionModel> for UserMission {
    fn from(model: UserMissionModel) -> Self {
        UserMission {
            id: Some(EntityId::new(model.id)),
            user_id: model.user_id.map(EntityId::new),
            mission_id: model.mission_id.map(EntityId::new),
            assigned_date: model.assigned_date,
            completed: model.completed,
        }
    }
}
