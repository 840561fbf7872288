//! Group database model

use sqlx::FromRow;

/// Database model for groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub founded_date: Option<i64>,
}
