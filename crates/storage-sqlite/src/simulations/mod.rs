//! SQLite storage implementation for simulations.

mod model;
mod repository;

pub use model::{NewSimulationDB, SimulationDB};
pub use repository::SimulationRepository;
