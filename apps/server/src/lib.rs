//! Nestegg server library: composition root, auth, and API routers.
//!
//! Exposed as a library so integration tests can build the full router
//! against a temporary database.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;
pub mod scheduler;

pub use main_lib::{build_state, init_tracing, AppState};
