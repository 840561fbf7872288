//! Intelligence database model

use sqlx::FromRow;

/// Database model for intelligence_reports table
#[derive(Debug, Clone, FromRow)]
pub struct IntelligenceModel {
    pub id: i64,
    pub author_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub intel_date: Option<i64>,
    pub classification: Option<String>,
}
