//! Message entity <-> model mapper

use amc_core::entities::Message;
use amc_core::value_objects::EntityId;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Some(EntityId::new(model.id)),
            sender_id: model.sender_id.map(EntityId::new),
            recipient_id: model.recipient_id.map(EntityId::new),
            subject: model.subject,
            body: model.body,
            sent_date: model.sent_date,
            read: model.read,
        }
    }
}
