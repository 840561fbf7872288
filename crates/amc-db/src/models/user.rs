//! User database model

use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
    pub join_date: Option<i64>,
    pub last_active: Option<i64>,
}
