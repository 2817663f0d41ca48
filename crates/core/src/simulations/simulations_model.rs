//! Simulation domain models.
//!
//! The whole simulations surface keeps snake_case wire names: assumptions
//! and trajectory documents are the published payload contract for this API
//! and are stored verbatim as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static inputs for a growth projection. Immutable once a run starts.
///
/// Rates are percentages (`7.5` means 7.5%). A negative expected return is
/// legal and produces a declining trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationAssumptions {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub time_horizon_years: u32,
    pub expected_return_rate: f64,
    pub inflation_rate: f64,
}

/// One emitted snapshot of the trajectory. Only annual checkpoints (plus
/// month 0) are emitted; intra-year months are computed but not reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub month: u32,
    pub year: u32,
    pub invested: f64,
    pub nominal_value: f64,
    pub real_value: f64,
}

/// Summary statistics over the full horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub years: u32,
    pub total_invested: f64,
    pub future_value_nominal: f64,
    pub future_value_real: f64,
    pub nominal_gain: f64,
    pub real_gain: f64,
    pub purchasing_power_loss: f64,
}

/// Full result document: summary plus the chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub summary: SimulationSummary,
    pub chart_data: Vec<TrajectoryPoint>,
}

/// A persisted simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub id: String,
    pub user_id: String,
    pub goal_id: Option<String>,
    pub scenario_name: String,
    pub assumptions: SimulationAssumptions,
    pub results: SimulationOutcome,
    pub created_at: DateTime<Utc>,
}

/// Input model for running and saving a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSimulation {
    pub scenario_name: String,
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub time_horizon_years: u32,
    pub expected_return_rate: f64,
    pub inflation_rate: f64,
    #[serde(default)]
    pub goal_id: Option<String>,
}

impl NewSimulation {
    pub fn assumptions(&self) -> SimulationAssumptions {
        SimulationAssumptions {
            initial_amount: self.initial_amount,
            monthly_contribution: self.monthly_contribution,
            time_horizon_years: self.time_horizon_years,
            expected_return_rate: self.expected_return_rate,
            inflation_rate: self.inflation_rate,
        }
    }
}
