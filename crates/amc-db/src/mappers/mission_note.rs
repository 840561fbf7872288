//! MissionNote entity <-> model mapper

use amc_core::entities::MissionNote;
use amc_core::value_objects::EntityId;

use crate::models::MissionNoteModel;

/// Convert MissionNoteModel to MissionNote entity
impl From<MissionNoteModel> for MissionNote {
    fn from(model: MissionNoteModel) -> Self {
        MissionNote {
            id: Some(EntityId::new(model.id)),
            mission_id: model.mission_id.map(EntityId::new),
            author_id: model.author_id.map(EntityId::new),
            body: model.body,
            note_date: model.note_date,
        }
    }
}
