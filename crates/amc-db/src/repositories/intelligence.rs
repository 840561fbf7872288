//! Intelligence table binding and finders

use amc_core::entities::{EntityKind, Intelligence};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::IntelligenceModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Intelligence {
    type Row = IntelligenceModel;

    const TABLE: &'static str = "intelligence_reports";
    const COLUMNS: &'static [&'static str] =
        &["author_id", "title", "body", "intel_date", "classification"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[("author_id", EntityKind::User)];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.author_id.map(EntityId::into_inner))
            .bind(self.title.as_deref())
            .bind(self.body.as_deref())
            .bind(self.intel_date)
            .bind(self.classification.as_deref())
    }
}

impl PgRepository<Intelligence> {
    /// Reports filed by the given author
    pub async fn find_by_author(&self, author_id: EntityId) -> RepoResult<Vec<Intelligence>> {
        self.find_by("author_id", author_id.into_inner()).await
    }

    /// Reports at the given classification
    pub async fn find_by_classification(
        &self,
        classification: &str,
    ) -> RepoResult<Vec<Intelligence>> {
        self.find_by("classification", classification).await
    }
}
