//! UserMission database model

use sqlx::FromRow;

/// Database model for user_missions table
#[derive(Debug, Clone, FromRow)]
pub struct UserMissionModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub mission_id: Option<i64>,
    pub assigned_date: Option<i64>,
    pub completed: Option<bool>,
}
