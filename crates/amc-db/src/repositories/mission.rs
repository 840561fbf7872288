//! Mission table binding and finders

use amc_core::entities::Mission;
use amc_core::traits::RepoResult;

use crate::models::MissionModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Mission {
    type Row = MissionModel;

    const TABLE: &'static str = "missions";
    const COLUMNS: &'static [&'static str] =
        &["title", "briefing", "start_date", "end_date", "active"];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.title.as_deref())
            .bind(self.briefing.as_deref())
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.active)
    }
}

impl PgRepository<Mission> {
    /// Missions whose active flag is set
    pub async fn find_active(&self) -> RepoResult<Vec<Mission>> {
        self.find_by("active", true).await
    }
}
