//! # Forum Infrastructure
//!
//! Concrete implementations of the repository ports defined in `forum-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL gateway via SeaORM
//!
//! The in-memory gateway is always available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
