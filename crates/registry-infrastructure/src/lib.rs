//! # Registry Infrastructure
//!
//! PostgreSQL implementation of the user repository port.

pub mod database;

pub use database::{create_pool, run_migrations, PgUserRepository};
