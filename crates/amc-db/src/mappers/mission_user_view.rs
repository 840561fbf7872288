//! MissionUserView entity <-> model mapper

use amc_core::entities::MissionUserView;
use amc_core::value_objects::EntityId;

use crate::models::MissionUserViewModel;

/// Convert MissionUserViewModel to MissionUserView entity
impl From<MissionUserViewModel> for MissionUserView {
    fn from(model: MissionUserViewModel) -> Self {
        MissionUserView {
            id: Some(EntityId::new(model.id)),
            mission_id: model.mission_id.map(EntityId::new),
            user_id: model.user_id.map(EntityId::new),
        }
    }
}
