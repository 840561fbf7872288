//! AdminLog table binding and finders

use amc_core::entities::{AdminLog, EntityKind};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::AdminLogModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for AdminLog {
    type Row = AdminLogModel;

    const TABLE: &'static str = "admin_logs";
    const COLUMNS: &'static [&'static str] = &[
        "admin_id",
        "action",
        "target_kind",
        "target_id",
        "detail",
        "log_date",
    ];
    // target_id is deliberately not a foreign key; log entries must
    // survive deletion of whatever they point at.
    const REFERENCES: &'static [(&'static str, EntityKind)] =
        &[("admin_id", EntityKind::User)];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.admin_id.map(EntityId::into_inner))
            .bind(self.action.as_deref())
            .bind(self.target_kind.as_deref())
            .bind(self.target_id.map(EntityId::into_inner))
            .bind(self.detail.as_ref())
            .bind(self.log_date)
    }
}

impl PgRepository<AdminLog> {
    /// Entries recorded by the given admin
    pub async fn find_by_admin(&self, admin_id: EntityId) -> RepoResult<Vec<AdminLog>> {
        self.find_by("admin_id", admin_id.into_inner()).await
    }

    /// Entries for one action name
    pub async fn find_by_action(&self, action: &str) -> RepoResult<Vec<AdminLog>> {
        self.find_by("action", action).await
    }
}
