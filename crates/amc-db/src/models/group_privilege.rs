//! GroupPrivilege database model

use sqlx::FromRow;

/// Database model for group_privileges table
#[derive(Debug, Clone, FromRow)]
pub struct GroupPrivilegeModel {
    pub id: i64,
    pub group_id: Option<i64>,
    pub privilege: Option<String>,
    pub granted_date: Option<i64>,
}
