//! MissionNote database model

use sqlx::FromRow;

/// Database model for mission_notes table
#[derive(Debug, Clone, FromRow)]
pub struct MissionNoteModel {
    pub id: i64,
    pub mission_id: Option<i64>,
    pub author_id: Option<i64>,
    pub body: Option<String>,
    pub note_date: Option<i64>,
}
