//! SQL text assembly for the generic repository
//!
//! Statements are built from `Table` metadata alone. Table and column
//! names come from `&'static str` constants in this crate, never from
//! caller input; all values travel as bind parameters.

use super::table::Table;

/// `INSERT INTO t (c1, ..) VALUES ($1, ..) RETURNING id`
pub(crate) fn insert<E: Table>() -> String {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

/// `UPDATE t SET c1 = $1, .. WHERE id = $n`
pub(crate) fn update<E: Table>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE id = ${}",
        E::TABLE,
        assignments,
        E::COLUMNS.len() + 1
    )
}

/// `DELETE FROM t WHERE id = $1`
pub(crate) fn delete<E: Table>() -> String {
    format!("DELETE FROM {} WHERE id = $1", E::TABLE)
}

/// `SELECT id, c1, .. FROM t ORDER BY id`
pub(crate) fn select_all<E: Table>() -> String {
    format!(
        "SELECT id, {} FROM {} ORDER BY id",
        E::COLUMNS.join(", "),
        E::TABLE
    )
}

/// `SELECT id, c1, .. FROM t WHERE id = ANY($1) ORDER BY id`
pub(crate) fn select_ids<E: Table>() -> String {
    format!(
        "SELECT id, {} FROM {} WHERE id = ANY($1) ORDER BY id",
        E::COLUMNS.join(", "),
        E::TABLE
    )
}

/// `SELECT id, c1, .. FROM t WHERE col = $1 ORDER BY id`
pub(crate) fn select_where<E: Table>(column: &str) -> String {
    format!(
        "SELECT id, {} FROM {} WHERE {column} = $1 ORDER BY id",
        E::COLUMNS.join(", "),
        E::TABLE
    )
}

/// `SELECT EXISTS(SELECT 1 FROM t WHERE id = $1)`
pub(crate) fn exists<E: Table>() -> String {
    format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", E::TABLE)
}

/// `SELECT COUNT(*) FROM t`
pub(crate) fn count<E: Table>() -> String {
    format!("SELECT COUNT(*) FROM {}", E::TABLE)
}
