//! Error handling utilities for the generic repository

use sqlx::postgres::PgDatabaseError;
use sqlx::Error as SqlxError;

use amc_core::error::DomainError;
use amc_core::value_objects::EntityId;

use super::table::Table;

/// Convert SQLx error to DomainError
pub(crate) fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Convert a SQLx write error, resolving foreign-key violations back to
/// the reference that caused them.
///
/// Postgres reports the violated constraint name and a detail line of the
/// form `Key (user_id)=(42) is not present in table "users".`; together
/// they name the referenced kind and the missing id. Anything that cannot
/// be resolved stays a plain storage error.
pub(crate) fn map_write_error<E: Table>(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            if let Some(pg) = db_err.try_downcast_ref::<PgDatabaseError>() {
                if let Some(resolved) = resolve_fk_violation::<E>(pg) {
                    return resolved;
                }
            }
        }
    }
    DomainError::Storage(e.to_string())
}

fn resolve_fk_violation<E: Table>(pg: &PgDatabaseError) -> Option<DomainError> {
    let column = constraint_column(pg.constraint()?, E::TABLE)?;
    let (_, kind) = E::REFERENCES.iter().find(|(col, _)| *col == column)?;
    let id = detail_key_value(pg.detail()?)?;
    Some(DomainError::InvalidReference {
        kind: *kind,
        id: EntityId::new(id),
    })
}

/// Extract the column from a conventional `<table>_<column>_fkey` name
fn constraint_column<'a>(constraint: &'a str, table: &str) -> Option<&'a str> {
    constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_fkey")
}

/// Extract `42` from `Key (user_id)=(42) is not present in table "users".`
fn detail_key_value(detail: &str) -> Option<i64> {
    let start = detail.find(")=(")? + 3;
    let rest = &detail[start..];
    let end = rest.find(')')?;
    rest[..end].parse().ok()
}
