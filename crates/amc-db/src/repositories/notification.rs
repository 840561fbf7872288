//! Notification table binding and finders

use amc_core::entities::{EntityKind, Notification};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::NotificationModel;

use super::error::map_db_error;
use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Notification {
    type Row = NotificationModel;

    const TABLE: &'static str = "notifications";
    const COLUMNS: &'static [&'static str] = &["user_id", "body", "note_date", "seen"];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[("user_id", EntityKind::User)];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.map(EntityId::into_inner))
            .bind(self.body.as_deref())
            .bind(self.note_date)
            .bind(self.seen)
    }
}

impl PgRepository<Notification> {
    /// Alerts addressed to a user
    pub async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<Notification>> {
        self.find_by("user_id", user_id.into_inner()).await
    }

    /// Alerts the user has not acknowledged; an unset flag counts as unseen
    pub async fn find_unseen(&self, user_id: EntityId) -> RepoResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, user_id, body, note_date, seen
            FROM notifications
            WHERE user_id = $1 AND seen IS DISTINCT FROM TRUE
            ORDER BY id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(self.pool())
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }
}
