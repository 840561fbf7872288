//! Repository implementation
//!
//! A single generic PostgreSQL repository backs every entity in `amc-core`.
//! Each entity module here supplies the table metadata (`Table` impl) and
//! any typed finders that go beyond the shared CRUD surface.

mod admin_log;
mod ban;
mod error;
mod generic;
mod group;
mod group_privilege;
mod intelligence;
mod merit;
mod message;
mod mission;
mod mission_group_view;
mod mission_note;
mod mission_user_view;
mod news;
mod notification;
mod sql;
mod table;
mod user;
mod user_group;
mod user_mission;

pub use generic::PgRepository;
pub use table::{PgQuery, Table};
