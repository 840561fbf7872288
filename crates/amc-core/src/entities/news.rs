//! News entity - a front-page news post

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// News post record
///
/// Posts with `published` unset or `false` are drafts visible only to
/// staff surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct News {
    pub id: Option<EntityId>,
    pub author_id: Option<EntityId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub post_date: Option<i64>,
    pub published: Option<bool>,
}

impl News {
    /// Create a new News post with required fields
    pub fn new(author_id: EntityId, title: String, body: String) -> Self {
        Self {
            author_id: Some(author_id),
            title: Some(title),
            body: Some(body),
            published: Some(false),
            ..Self::default()
        }
    }

    /// Check if the post is publicly visible
    #[inline]
    pub fn is_published(&self) -> bool {
        self.published == Some(true)
    }
}

impl Entity for News {
    const KIND: EntityKind = EntityKind::News;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
