//! MissionGroupView table binding and finders

use amc_core::entities::{EntityKind, MissionGroupView};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::MissionGroupViewModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for MissionGroupView {
    type Row = MissionGroupViewModel;

    const TABLE: &'static str = "mission_group_views";
    const COLUMNS: &'static [&'static str] = &["mission_id", "group_id"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("mission_id", EntityKind::Mission),
        ("group_id", EntityKind::Group),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.mission_id.map(EntityId::into_inner))
            .bind(self.group_id.map(EntityId::into_inner))
    }
}

impl PgRepository<MissionGroupView> {
    /// Grants attached to a mission
    pub async fn find_by_mission(&self, mission_id: EntityId) -> RepoResult<Vec<MissionGroupView>> {
        self.find_by("mission_id", mission_id.into_inner()).await
    }

    /// Missions a group has been granted sight of
    pub async fn find_by_group(&self, group_id: EntityId) -> RepoResult<Vec<MissionGroupView>> {
        self.find_by("group_id", group_id.into_inner()).await
    }
}
