//! Mission database model

use sqlx::FromRow;

/// Database model for missions table
#[derive(Debug, Clone, FromRow)]
pub struct MissionModel {
    pub id: i64,
    pub title: Option<String>,
    pub briefing: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub active: Option<bool>,
}
