//! Message entity - user-to-user mail

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Message record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub id: Option<EntityId>,
    pub sender_id: Option<EntityId>,
    pub recipient_id: Option<EntityId>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub sent_date: Option<i64>,
    pub read: Option<bool>,
}

impl Message {
    /// Create a new Message with required fields
    pub fn new(sender_id: EntityId, recipient_id: EntityId, subject: String, body: String) -> Self {
        Self {
            sender_id: Some(sender_id),
            recipient_id: Some(recipient_id),
            subject: Some(subject),
            body: Some(body),
            read: Some(false),
            ..Self::default()
        }
    }

    /// Check if the recipient has not opened the message yet
    #[inline]
    pub fn is_unread(&self) -> bool {
        self.read != Some(true)
    }
}

impl Entity for Message {
    const KIND: EntityKind = EntityKind::Message;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
