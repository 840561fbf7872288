//! MissionUserView database model

use sqlx::FromRow;

/// Database model for mission_user_views table
#[derive(Debug, Clone, FromRow)]
pub struct MissionUserViewModel {
    pub id: i64,
    pub mission_id: Option<i64>,
    pub user_id: Option<i64>,
}
