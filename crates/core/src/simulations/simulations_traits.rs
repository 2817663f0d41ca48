use async_trait::async_trait;

use crate::errors::Result;
use crate::simulations::simulations_model::{
    NewSimulation, Simulation, SimulationAssumptions, SimulationOutcome,
};

/// Trait for simulation repository operations
#[async_trait]
pub trait SimulationRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Simulation>>;
    async fn insert(
        &self,
        user_id: &str,
        scenario_name: String,
        goal_id: Option<String>,
        assumptions: SimulationAssumptions,
        results: SimulationOutcome,
    ) -> Result<Simulation>;
    async fn delete(&self, user_id: &str, simulation_id: &str) -> Result<usize>;
}

/// Trait for simulation service operations
#[async_trait]
pub trait SimulationServiceTrait: Send + Sync {
    fn get_simulations(&self, user_id: &str) -> Result<Vec<Simulation>>;

    /// Runs the simulator over the new scenario's assumptions and persists
    /// `{assumptions, results}` as one record.
    async fn run_simulation(
        &self,
        user_id: &str,
        new_simulation: NewSimulation,
    ) -> Result<Simulation>;

    async fn delete_simulation(&self, user_id: &str, simulation_id: &str) -> Result<usize>;
}
