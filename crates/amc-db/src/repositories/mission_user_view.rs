//! MissionUserView table binding and finders

use amc_core::entities::{EntityKind, MissionUserView};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::MissionUserViewModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for MissionUserView {
    type Row = MissionUserViewModel;

    const TABLE: &'static str = "mission_user_views";
    const COLUMNS: &'static [&'static str] = &["mission_id", "user_id"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("mission_id", EntityKind::Mission),
        ("user_id", EntityKind::User),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.mission_id.map(EntityId::into_inner))
            .bind(self.user_id.map(EntityId::into_inner))
    }
}

impl PgRepository<MissionUserView> {
    /// Grants attached to a mission
    pub async fn find_by_mission(&self, mission_id: EntityId) -> RepoResult<Vec<MissionUserView>> {
        self.find_by("mission_id", mission_id.into_inner()).await
    }

    /// Missions a user has been granted sight of
    pub async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<MissionUserView>> {
        self.find_by("user_id", user_id.into_inner()).await
    }
}
