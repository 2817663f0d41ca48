//! Simulations module - the compound-growth projection engine and the
//! service that persists scenario runs.

mod simulations_model;
mod simulations_service;
mod simulations_traits;
mod simulator;
#[cfg(test)]
mod simulator_tests;

pub use simulations_model::{
    NewSimulation, Simulation, SimulationAssumptions, SimulationOutcome, SimulationSummary,
    TrajectoryPoint,
};
pub use simulations_service::SimulationService;
pub use simulations_traits::{SimulationRepositoryTrait, SimulationServiceTrait};
pub use simulator::simulate;
