//! GroupPrivilege table binding and finders

use amc_core::entities::{EntityKind, GroupPrivilege};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::GroupPrivilegeModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for GroupPrivilege {
    type Row = GroupPrivilegeModel;

    const TABLE: &'static str = "group_privileges";
    const COLUMNS: &'static [&'static str] = &["group_id", "privilege", "granted_date"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[("group_id", EntityKind::Group)];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.group_id.map(EntityId::into_inner))
            .bind(self.privilege.as_deref())
            .bind(self.granted_date)
    }
}

impl PgRepository<GroupPrivilege> {
    /// Privileges granted to a group
    pub async fn find_by_group(&self, group_id: EntityId) -> RepoResult<Vec<GroupPrivilege>> {
        self.find_by("group_id", group_id.into_inner()).await
    }

    /// Groups holding a named privilege
    pub async fn find_by_privilege(&self, privilege: &str) -> RepoResult<Vec<GroupPrivilege>> {
        self.find_by("privilege", privilege).await
    }
}
