//! Store facade
//!
//! [`AmcStore`] owns the connection pool and hands out per-entity
//! repositories. Callers receive the store (or a single repository) by
//! injection; nothing in this crate reaches for process-wide state.

use amc_core::entities::{
    AdminLog, Ban, Group, GroupPrivilege, Intelligence, Merit, Message, Mission, MissionGroupView,
    MissionNote, MissionUserView, News, Notification, User, UserGroup, UserMission,
};

use crate::pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
use crate::repositories::{PgRepository, Table};

/// Handle over every table repository.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Clone, Debug)]
pub struct AmcStore {
    pool: PgPool,
}

impl AmcStore {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to PostgreSQL and wrap the resulting pool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = create_pool(config).await?;
        Ok(Self::new(pool))
    }

    /// Apply any pending migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        run_migrations(&self.pool).await
    }

    /// The underlying pool, for ad-hoc queries and health checks.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Repository for any mapped entity type.
    pub fn repository<E: Table>(&self) -> PgRepository<E> {
        PgRepository::new(self.pool.clone())
    }

    pub fn users(&self) -> PgRepository<User> {
        self.repository()
    }

    pub fn groups(&self) -> PgRepository<Group> {
        self.repository()
    }

    pub fn bans(&self) -> PgRepository<Ban> {
        self.repository()
    }

    pub fn merits(&self) -> PgRepository<Merit> {
        self.repository()
    }

    pub fn news(&self) -> PgRepository<News> {
        self.repository()
    }

    pub fn missions(&self) -> PgRepository<Mission> {
        self.repository()
    }

    pub fn intelligence(&self) -> PgRepository<Intelligence> {
        self.repository()
    }

    pub fn messages(&self) -> PgRepository<Message> {
        self.repository()
    }

    pub fn notifications(&self) -> PgRepository<Notification> {
        self.repository()
    }

    pub fn admin_logs(&self) -> PgRepository<AdminLog> {
        self.repository()
    }

    pub fn mission_notes(&self) -> PgRepository<MissionNote> {
        self.repository()
    }

    pub fn user_groups(&self) -> PgRepository<UserGroup> {
        self.repository()
    }

    pub fn group_privileges(&self) -> PgRepository<GroupPrivilege> {
        self.repository()
    }

    pub fn user_missions(&self) -> PgRepository<UserMission> {
        self.repository()
    }

    pub fn mission_group_views(&self) -> PgRepository<MissionGroupView> {
        self.repository()
    }

    pub fn mission_user_views(&self) -> PgRepository<MissionUserView> {
        self.repository()
    }
}
