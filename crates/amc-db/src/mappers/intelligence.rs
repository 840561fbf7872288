//! Intelligence entity <-> model mapper

use amc_core::entities::Intelligence;
use amc_core::value_objects::EntityId;

use crate::models::IntelligenceModel;

/// Convert IntelligenceModel to Intelligence entity
impl From<IntelligenceModel> for Intelligence {
    fn from(model: IntelligenceModel) -> Self {
        Intelligence {
            id: Some(EntityId::new(model.id)),
            author_id: model.author_id.map(EntityId::new),
            title: model.title,
            body: model.body,
            intel_date: model.intel_date,
            classification: model.classification,
        }
    }
}
