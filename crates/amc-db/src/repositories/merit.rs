//! Merit table binding and finders

use amc_core::entities::{EntityKind, Merit};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::MeritModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Merit {
    type Row = MeritModel;

    const TABLE: &'static str = "merits";
    const COLUMNS: &'static [&'static str] =
        &["user_id", "admin_id", "reason", "points", "merit_date"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("user_id", EntityKind::User),
        ("admin_id", EntityKind::User),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.map(EntityId::into_inner))
            .bind(self.admin_id.map(EntityId::into_inner))
            .bind(self.reason.as_deref())
            .bind(self.points)
            .bind(self.merit_date)
    }
}

impl PgRepository<Merit> {
    /// All merits awarded to a user
    pub async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<Merit>> {
        self.find_by("user_id", user_id.into_inner()).await
    }
}
