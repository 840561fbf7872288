//! MissionNote table binding and finders

use amc_core::entities::{EntityKind, MissionNote};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::MissionNoteModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for MissionNote {
    type Row = MissionNoteModel;

    const TABLE: &'static str = "mission_notes";
    const COLUMNS: &'static [&'static str] = &["mission_id", "author_id", "body", "note_date"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("mission_id", EntityKind::Mission),
        ("author_id", EntityKind::User),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.mission_id.map(EntityId::into_inner))
            .bind(self.author_id.map(EntityId::into_inner))
            .bind(self.body.as_deref())
            .bind(self.note_date)
    }
}

impl PgRepository<MissionNote> {
    /// Notes attached to a mission
    pub async fn find_by_mission(&self, mission_id: EntityId) -> RepoResult<Vec<MissionNote>> {
        self.find_by("mission_id", mission_id.into_inner()).await
    }
}
