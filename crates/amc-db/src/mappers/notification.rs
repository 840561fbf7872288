//! Notification entity <-> model mapper

use amc_core::entities::Notification;
use amc_core::value_objects::EntityId;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Some(EntityId::new(model.id)),
            user_id: model.user_id.map(EntityId::new),
            body: model.body,
            note_date: model.note_date,
            seen: model.seen,
        }
    }
}
