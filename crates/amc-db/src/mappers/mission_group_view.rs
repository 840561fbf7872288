//! MissionGroupView entity <-> model mapper

use amc_core::entities::MissionGroupView;
use amc_core::value_objects::EntityId;

use crate::models::MissionGroupViewModel;

/// Convert MissionGroupViewModel to MissionGroupView entity
impl From<MissionGroupViewModel> for MissionGroupView {
    fn from(model: MissionGroupViewModel) -> Self {
        MissionGroupView {
            id: Some(EntityId::new(model.id)),
            mission_id: model.mission_id.map(EntityId::new),
            group_id: model.group_id.map(EntityId::new),
        }
    }
}
