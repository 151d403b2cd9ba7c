//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain records. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database errors are classified once in
//!   `diesel_helpers` and converted into each port's error type.
//!
//! # Example
//!
//! ```ignore
//! use marketplace::outbound::persistence::{DbPool, PoolConfig, diesel_record_ports};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/mydb")).await?;
//! let ports = diesel_record_ports(&pool);
//! ```

pub(crate) mod diesel_helpers;
mod diesel_record_repository;
mod diesel_relation_query;
mod diesel_sample_data_seed_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_record_repository::{DieselRecordRepository, diesel_record_ports};
pub use diesel_relation_query::DieselRelationQuery;
pub use diesel_sample_data_seed_repository::DieselSampleDataSeedRepository;
pub use migrations::{MIGRATIONS, MigrationError, pending_migrations, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
