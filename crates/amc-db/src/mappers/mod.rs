//! Entity to model mappers
//!
//! This module provides conversions between domain entities (amc-core) and
//! database models: `From<Model> for Entity` turns fetched rows into domain
//! objects. The write direction needs no mapper structs; each entity binds
//! its own fields through its `Table` implementation.

mod admin_log;
mod ban;
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
mod user;
mod user_group;
mod user_mission;
