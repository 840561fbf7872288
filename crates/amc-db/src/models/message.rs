//! Message database model

use sqlx::FromRow;

/// Database model for user_messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender_id: Option<i64>,
    pub recipient_id: Option<i64>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub sent_date: Option<i64>,
    pub read: Option<bool>,
}
