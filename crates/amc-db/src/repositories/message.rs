//! Message table binding and finders

use amc_core::entities::{EntityKind, Message};
use amc_core::traits::RepoResult;
use amc_core::value_objects::EntityId;

use crate::models::MessageModel;

use super::error::map_db_error;
use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for Message {
    type Row = MessageModel;

    const TABLE: &'static str = "user_messages";
    const COLUMNS: &'static [&'static str] = &[
        "sender_id",
        "recipient_id",
        "subject",
        "body",
        "sent_date",
        "read",
    ];
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[
        ("sender_id", EntityKind::User),
        ("recipient_id", EntityKind::User),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.sender_id.map(EntityId::into_inner))
            .bind(self.recipient_id.map(EntityId::into_inner))
            .bind(self.subject.as_deref())
            .bind(self.body.as_deref())
            .bind(self.sent_date)
            .bind(self.read)
    }
}

impl PgRepository<Message> {
    /// Mail received by a user
    pub async fn find_by_recipient(&self, recipient_id: EntityId) -> RepoResult<Vec<Message>> {
        self.find_by("recipient_id", recipient_id.into_inner()).await
    }

    /// Mail sent by a user
    pub async fn find_by_sender(&self, sender_id: EntityId) -> RepoResult<Vec<Message>> {
        self.find_by("sender_id", sender_id.into_inner()).await
    }

    /// Unread mail waiting for a recipient
    ///
    /// Agrees with [`Message::is_unread`]: a row with the flag unset counts
    /// as unread.
    pub async fn find_unread(&self, recipient_id: EntityId) -> RepoResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, sender_id, recipient_id, subject, body, sent_date, read
            FROM user_messages
            WHERE recipient_id = $1 AND read IS DISTINCT FROM TRUE
            ORDER BY id
            ",
        )
        .bind(recipient_id.into_inner())
        .fetch_all(self.pool())
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
