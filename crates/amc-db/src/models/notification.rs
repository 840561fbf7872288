//! Notification database model

use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub body: Option<String>,
    pub note_date: Option<i64>,
    pub seen: Option<bool>,
}
