//! Merit database model

use sqlx::FromRow;

/// Database model for merits table
#[derive(Debug, Clone, FromRow)]
pub struct MeritModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub reason: Option<String>,
    pub points: Option<i32>,
    pub merit_date: Option<i64>,
}
