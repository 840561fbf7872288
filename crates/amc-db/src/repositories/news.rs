//! News table binding and finders

use amc_core::entities::{EntityKind, News};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::NewsModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for News {
    type Row = NewsModel;

    const TABLE: &'static str = "news";
    const COLUMNS: &'static [&'static str] =
        &["author_id", "title", "body", "post_date", "published"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[("author_id", EntityKind::User)];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.author_id.map(EntityId::into_inner))
            .bind(self.title.as_deref())
            .bind(self.body.as_deref())
            .bind(self.post_date)
            .bind(self.published)
    }
}

impl PgRepository<News> {
    /// Posts by the given author
    pub async fn find_by_author(&self, author_id: EntityId) -> RepoResult<Vec<News>> {
        self.find_by("author_id", author_id.into_inner()).await
    }

    /// Publicly visible posts
    pub async fn find_published(&self) -> RepoResult<Vec<News>> {
        self.find_by("published", true).await
    }
}
