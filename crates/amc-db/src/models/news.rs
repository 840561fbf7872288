//! News database model

use sqlx::FromRow;

/// Database model for news table
#[derive(Debug, Clone, FromRow)]
pub struct NewsModel {
    pub id: i64,
    pub author_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub post_date: Option<i64>,
    pub published: Option<bool>,
}
