//! AdminLog database model

use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for admin_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AdminLogModel {
    pub id: i64,
    pub admin_id: Option<i64>,
    pub action: Option<String>,
    pub target_kind: Option<String>,
    pub target_id: Option<i64>,
    pub detail: Option<JsonValue>,
    pub log_date: Option<i64>,
}
