//! Group table binding and finders

use amc_core::entities::Group;
use amc_core::traits::RepoResult;

use crate::models::GroupModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Group {
    type Row = GroupModel;

    const TABLE: &'static str = "groups";
    const COLUMNS: &'static [&'static str] = &["name", "description", "founded_date"];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.as_deref())
            .bind(self.description.as_deref())
            .bind(self.founded_date)
    }
}

impl PgRepository<Group> {
    /// Groups with the given name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Group>> {
        self.find_by("name", name).await
    }
}
