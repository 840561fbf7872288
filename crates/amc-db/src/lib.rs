//! # amc-db
//!
//! Persistence layer implementing the `amc-core` store contract with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - A generic repository ([`PgRepository`]) parameterized over the
//!   [`Table`] metadata each entity supplies
//! - [`AmcStore`], a facade handing out repositories from one shared pool
//!
//! ## Usage
//!
//! ```rust,ignore
//! use amc_core::{EntityStore, User};
//! use amc_db::{AmcStore, DatabaseConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = AmcStore::connect(&DatabaseConfig::from_env()).await?;
//!     store.migrate().await?;
//!
//!     let mut user = User::new("erika".to_string(), "erika@example.org".to_string());
//!     store.users().create(&mut user).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod store;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgRepository, Table};
pub use store::AmcStore;
