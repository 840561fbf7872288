//! UserGroup table binding and finders

use amc_core::entities::{EntityKind, UserGroup};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::UserGroupModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for UserGroup {
    type Row = UserGroupModel;

    const TABLE: &'static str = "user_groups";
    const COLUMNS: &'static [&'static str] = &["user_id", "group_id", "joined_date"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("user_id", EntityKind::User),
        ("group_id", EntityKind::Group),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.map(EntityId::into_inner))
            .bind(self.group_id.map(EntityId::into_inner))
            .bind(self.joined_date)
    }
}

impl PgRepository<UserGroup> {
    /// Memberships held by a user
    pub async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<UserGroup>> {
        self.find_by("user_id", user_id.into_inner()).await
    }

    /// Memberships of a group
    pub async fn find_by_group(&self, group_id: EntityId) -> RepoResult<Vec<UserGroup>> {
        self.find_by("group_id", group_id.into_inner()).await
    }
}
