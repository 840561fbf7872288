//! Domain errors - error types for the persistence layer

use thiserror::Error;

use crate::entities::EntityKind;
use crate::value_objects::EntityId;

/// Persistence layer errors
///
/// Every variant carries the kind of record involved so the rendered
/// message names the entity ("Cannot store a blank Ban") without a
/// separate error type per record kind.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The record holds no data at all (identity unset, every field empty)
    #[error("Cannot store a blank {0}")]
    BlankEntity(EntityKind),

    /// A reference points at a row that does not exist
    #[error("No {kind} exists with id {id}")]
    InvalidReference { kind: EntityKind, id: EntityId },

    /// Update on a record that was never stored
    #[error("Cannot update a {0} that has never been stored")]
    NotPersisted(EntityKind),

    /// A write named an identity no stored row matches
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Unclassified database or driver failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Get an error code string for logs and API surfaces
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankEntity(_) => "BLANK_ENTITY",
            Self::InvalidReference { .. } => "INVALID_REFERENCE",
            Self::NotPersisted(_) => "NOT_PERSISTED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error rejected the write before it reached storage
    pub fn is_rejected_write(&self) -> bool {
        matches!(self, Self::BlankEntity(_) | Self::NotPersisted(_))
    }

    /// Check if this is a broken-reference error
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Self::InvalidReference { .. })
    }
}
