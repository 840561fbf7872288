//! MissionGroupView database model

use sqlx::FromRow;

/// Database model for mission_group_views table
#[derive(Debug, Clone, FromRow)]
pub struct MissionGroupViewModel {
    pub id: i64,
    pub mission_id: Option<i64>,
    pub group_id: Option<i64>,
}
