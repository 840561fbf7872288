//! Ban database model

use sqlx::FromRow;

/// Database model for bans table
#[derive(Debug, Clone, FromRow)]
pub struct BanModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub reason: Option<String>,
    pub ban_date: Option<i64>,
    pub active: Option<bool>,
    pub expiry: Option<i64>,
}
