//! News entity <-> model mapper

use amc_core::entities::News;
use amc_core::value_objects::EntityId;

use crate::models::NewsModel;

/// Convert NewsModel to News entity
impl From<NewsModel> for News {
    fn from(model: NewsModel) -> Self {
        News {
            id: Some(EntityId::new(model.id)),
            author_id: model.author_id.map(EntityId::new),
            title: model.title,
            body: model.body,
            post_date: model.post_date,
            published: model.published,
        }
    }
}
