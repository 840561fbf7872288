//! Entity contract - shared shape of every stored record

use crate::entities::EntityKind;
use crate::value_objects::EntityId;

/// Contract implemented by every AMC record type.
///
/// Equality is structural: each entity derives `PartialEq`, so two instances
/// compare equal exactly when every field matches, identity included.
/// Records of different kinds are different Rust types and can never compare
/// equal at all.
///
/// Every payload field on an entity is an `Option`; a field that was never
/// set (or came back `NULL` from storage) is `None`. A record with identity
/// unset and every payload field `None` is *blank* and is refused by the
/// store's write operations.
pub trait Entity: Clone + PartialEq + Default + Send + Sync {
    /// Kind tag used in errors and reference metadata.
    const KIND: EntityKind;

    /// Storage identity, `None` until the record is first created.
    fn id(&self) -> Option<EntityId>;

    /// Overwrite the in-memory identity (assigned on create, cleared on delete).
    fn set_id(&mut self, id: Option<EntityId>);

    /// True when the record holds no data at all.
    ///
    /// Blank is the `Default` state: identity unset and every payload field
    /// `None`. A record with identity but no payload is not blank.
    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
