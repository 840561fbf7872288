//! Table metadata - binds an entity kind to its storage

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use amc_core::entities::EntityKind;
use amc_core::traits::Entity;

/// A parameterized statement under construction
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Storage metadata for one entity kind.
///
/// Implementations supply the table name, the payload column list in bind
/// order, and the field binding; the generic repository assembles and
/// executes every statement from these three pieces. The identity column
/// is always `id` and is never listed in `COLUMNS`.
pub trait Table: Entity {
    /// Row struct hydrated by sqlx and converted into the entity
    type Row: for<'r> FromRow<'r, PgRow> + Into<Self> + Send + Unpin;

    /// Table name
    const TABLE: &'static str;

    /// Payload columns, in the order `bind` pushes their values
    const COLUMNS: &'static [&'static str];

    /// Foreign-key columns and the kind each references
    ///
    /// Drives the resolution of constraint violations back to an
    /// `InvalidReference` naming the missing kind and id.
    const REFERENCES: &'static [(&'static str, EntityKind)] = &[];

    /// Bind every payload field in `COLUMNS` order
    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}
