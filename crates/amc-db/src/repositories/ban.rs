//! Ban table binding and finders

use amc_core::entities::{Ban, EntityKind};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::BanModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Ban {
    type Row = BanModel;

    const TABLE: &'static str = "bans";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "admin_id",
        "reason",
        "ban_date",
        "active",
        "expiry",
    ];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("user_id", EntityKind::User),
        ("admin_id", EntityKind::User),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.map(EntityId::into_inner))
            .bind(self.admin_id.map(EntityId::into_inner))
            .bind(self.reason.as_deref())
            .bind(self.ban_date)
            .bind(self.active)
            .bind(self.expiry)
    }
}

impl PgRepository<Ban> {
    /// All bans recorded against a user
    pub async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<Ban>> {
        self.find_by("user_id", user_id.into_inner()).await
    }

    /// Bans whose active flag is set
    pub async fn find_active(&self) -> RepoResult<Vec<Ban>> {
        self.find_by("active", true).await
    }
}
