//! SQLite storage implementation for Nestegg.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `nestegg-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations (including the risk-question seed data)
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! All writes are funneled through a single-writer actor that executes each
//! job inside an immediate transaction on one dedicated connection. That
//! gives every multi-statement job (e.g. transaction insert + position
//! upsert) atomicity, and serializes concurrent writers without row locks.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod goals;
pub mod investments;
pub mod portfolio_history;
pub mod risk;
pub mod simulations;
pub mod transactions;
pub mod users;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from nestegg-core for convenience
pub use nestegg_core::errors::{DatabaseError, Error, Result};
