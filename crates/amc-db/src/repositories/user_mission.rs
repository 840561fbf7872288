//! UserMission table binding and finders

use amc_core::entities::{EntityKind, UserMission};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::UserMissionModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for UserMission {
    type Row = UserMissionModel;

    const TABLE: &'static str = "user_missions";
    const COLUMNS: &'static [&'static str] =
        &["user_id", "mission_id", "assigned_date", "completed"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("user_id", EntityKind::User),
        ("mission_id", EntityKind::Mission),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.map(EntityId::into_inner))
            .bind(self.mission_id.map(EntityId::into_inner))
            .bind(self.assigned_date)
            .bind(self.completed)
    }
}

impl PgRepository<UserMission> {
    /// Assignments held by a user
    pub async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<UserMission>> {
        self.find_by("user_id", user_id.into_inner()).await
    }

    /// Assignments on a mission
    pub async fn find_by_mission(&self, mission_id: EntityId) -> RepoResult<Vec<UserMission>> {
        self.find_by("mission_id", mission_id.into_inner()).await
    }
}
