//! AdminLog entity - an audit trail entry for a staff action

use serde_json::Value as JsonValue;

use crate::entities::EntityKind;
use crate::traits::Entity;
use crate::value_objects::EntityId;

/// Admin audit log record
///
/// `target_kind` and `target_id` name the record the action touched
/// without a foreign key, so log entries survive the target's deletion.
/// `detail` is free-form JSON captured at action time.
///
/// Derives `PartialEq` only: `detail` holds a `serde_json::Value`, which
/// has no total equality over floats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminLog {
    pub id: Option<EntityId>,
    pub admin_id: Option<EntityId>,
    pub action: Option<String>,
    pub target_kind: Option<String>,
    pub target_id: Option<EntityId>,
    pub detail: Option<JsonValue>,
    pub log_date: Option<i64>,
}

impl AdminLog {
    /// Create a new AdminLog entry with required fields
    pub fn new(admin_id: EntityId, action: String) -> Self {
        Self {
            admin_id: Some(admin_id),
            action: Some(action),
            ..Self::default()
        }
    }

    /// Name the record the action was applied to
    pub fn with_target(mut self, kind: EntityKind, id: EntityId) -> Self {
        self.target_kind = Some(kind.as_str().to_string());
        self.target_id = Some(id);
        self
    }
}

impl Entity for AdminLog {
    const KIND: EntityKind = EntityKind::AdminLog;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
