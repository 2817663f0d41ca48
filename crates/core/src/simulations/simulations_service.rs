use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Result, ValidationError};
use crate::simulations::simulations_model::{NewSimulation, Simulation};
use crate::simulations::simulations_traits::{SimulationRepositoryTrait, SimulationServiceTrait};
use crate::simulations::simulator::simulate;

/// Service for running and persisting growth simulations.
pub struct SimulationService {
    simulation_repository: Arc<dyn SimulationRepositoryTrait>,
}

impl SimulationService {
    pub fn new(simulation_repository: Arc<dyn SimulationRepositoryTrait>) -> Self {
        Self {
            simulation_repository,
        }
    }

    fn validate(new_simulation: &NewSimulation) -> Result<()> {
        if new_simulation.scenario_name.trim().is_empty() {
            return Err(ValidationError::MissingField("scenario_name".to_string()).into());
        }
        if new_simulation.time_horizon_years == 0 {
            return Err(ValidationError::InvalidInput(
                "Time horizon must be at least one year".to_string(),
            )
            .into());
        }
        if new_simulation.initial_amount < 0.0 || !new_simulation.initial_amount.is_finite() {
            return Err(ValidationError::InvalidInput(
                "Initial amount must be a non-negative number".to_string(),
            )
            .into());
        }
        if new_simulation.monthly_contribution < 0.0
            || !new_simulation.monthly_contribution.is_finite()
        {
            return Err(ValidationError::InvalidInput(
                "Monthly contribution must be a non-negative number".to_string(),
            )
            .into());
        }
        if !new_simulation.expected_return_rate.is_finite()
            || !new_simulation.inflation_rate.is_finite()
        {
            return Err(
                ValidationError::InvalidInput("Rates must be finite numbers".to_string()).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl SimulationServiceTrait for SimulationService {
    fn get_simulations(&self, user_id: &str) -> Result<Vec<Simulation>> {
        self.simulation_repository.list_for_user(user_id)
    }

    async fn run_simulation(
        &self,
        user_id: &str,
        new_simulation: NewSimulation,
    ) -> Result<Simulation> {
        Self::validate(&new_simulation)?;

        let assumptions = new_simulation.assumptions();
        let results = simulate(&assumptions);
        debug!(
            "Simulation '{}' for user {}: {} -> {} nominal over {}y",
            new_simulation.scenario_name,
            user_id,
            results.summary.total_invested,
            results.summary.future_value_nominal,
            assumptions.time_horizon_years
        );

        self.simulation_repository
            .insert(
                user_id,
                new_simulation.scenario_name,
                new_simulation.goal_id,
                assumptions,
                results,
            )
            .await
    }

    async fn delete_simulation(&self, user_id: &str, simulation_id: &str) -> Result<usize> {
        self.simulation_repository
            .delete(user_id, simulation_id)
            .await
    }
}
