//! UserGroup database model

use sqlx::FromRow;

/// Database model for user_groups table
#[derive(Debug, Clone, FromRow)]
pub struct UserGroupModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub group_id: Option<i64>,
    pub joined_date: Option<i64>,
}
