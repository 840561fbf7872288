//! Store contract (port) - defines the interface for record persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Unlike a classic per-entity repository
//! port there is exactly one contract here: every record kind is stored
//! through the same five operations, parameterized by the entity type.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Persistence operations for one record kind.
///
/// Implemented by the PostgreSQL repository in `amc-db` and by the
/// in-memory store the semantics tests run against. Every call is one
/// independent round-trip; there is no batching and no cross-record
/// transaction, so under concurrent writers to the same row the last
/// write wins field-wise per statement.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Insert `entity` as a new row and write the assigned identity back
    /// into it.
    ///
    /// A blank record is refused with [`DomainError::BlankEntity`]. Create
    /// always inserts a fresh row: any identity already on the record is
    /// discarded and replaced by the newly assigned one.
    async fn create(&self, entity: &mut E) -> RepoResult<()>;

    /// Overwrite the row matching the record's identity with its current
    /// field values.
    ///
    /// Keeps create's blank guard ([`DomainError::BlankEntity`]). Fails
    /// with [`DomainError::NotPersisted`] when the record carries no
    /// identity, and with [`DomainError::NotFound`] when no row matched.
    async fn update(&self, entity: &E) -> RepoResult<()>;

    /// Remove the row matching the record's identity and clear the
    /// in-memory identity.
    ///
    /// Deleting a record that was never stored is inert: no statement is
    /// issued and the call succeeds. A row already removed by someone else
    /// is not an error either.
    async fn delete(&self, entity: &mut E) -> RepoResult<()>;

    /// Fetch the records whose identities appear in `ids`.
    ///
    /// An empty `ids` slice selects every stored row. Identities without a
    /// matching row are silently omitted from the result; results come
    /// back in ascending identity order.
    async fn select(&self, ids: &[EntityId]) -> RepoResult<Vec<E>>;

    /// Point-in-time check that a row with `id` exists.
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;

    /// Validate `id` against the stored rows before wiring it into a
    /// reference field.
    ///
    /// Returns the id unchanged when a row exists, otherwise
    /// [`DomainError::InvalidReference`]. The check is point-in-time only;
    /// the schema's foreign-key constraints remain the durable guarantee.
    async fn check_reference(&self, id: EntityId) -> RepoResult<EntityId> {
        if self.exists(id).await? {
            Ok(id)
        } else {
            Err(DomainError::InvalidReference { kind: E::KIND, id })
        }
    }
}
