//! Growth simulator: deterministic month-by-month projection of nominal and
//! inflation-adjusted portfolio value.
//!
//! Pure, total function of the assumptions. Callers validate the horizon at
//! the boundary; a zero-year horizon is legal here and yields only the
//! month-0 snapshot.
//!
//! Two arithmetic choices are load-bearing and must not be "fixed":
//! - The monthly return is the simple `annual / 12`, not a
//!   compounding-equivalent monthly rate.
//! - The real value is re-derived every month by discounting the entire
//!   current nominal balance with ANNUAL compounding over elapsed fractional
//!   years (`nominal / (1 + inflation)^(m/12)`), rather than tracking an
//!   independently compounded real balance.
//!
//! Internal accumulation is unrounded; figures are rounded to 2 decimal
//! places only when emitted.

use crate::simulations::simulations_model::{
    SimulationAssumptions, SimulationOutcome, SimulationSummary, TrajectoryPoint,
};

/// Round to 2 decimal places for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Runs the projection and returns the trajectory plus summary.
///
/// The trajectory always contains exactly `time_horizon_years + 1` points:
/// month 0 and one per completed year.
pub fn simulate(assumptions: &SimulationAssumptions) -> SimulationOutcome {
    let return_rate = assumptions.expected_return_rate / 100.0;
    let inflation_rate = assumptions.inflation_rate / 100.0;

    let months = assumptions.time_horizon_years * 12;
    let monthly_return_rate = return_rate / 12.0;

    let mut nominal_balance = assumptions.initial_amount;
    let mut real_balance = assumptions.initial_amount;
    let mut total_invested = assumptions.initial_amount;

    let mut chart_data = Vec::with_capacity(assumptions.time_horizon_years as usize + 1);
    chart_data.push(TrajectoryPoint {
        month: 0,
        year: 0,
        invested: round2(total_invested),
        nominal_value: round2(nominal_balance),
        real_value: round2(real_balance),
    });

    for m in 1..=months {
        // 1. Growth on the running balance
        nominal_balance += nominal_balance * monthly_return_rate;

        // 2. Contribution lands after growth
        nominal_balance += assumptions.monthly_contribution;
        total_invested += assumptions.monthly_contribution;

        // 3. Discount the whole nominal balance back to present value
        let years_passed = f64::from(m) / 12.0;
        let discount_factor = (1.0 + inflation_rate).powf(years_passed);
        real_balance = nominal_balance / discount_factor;

        // Annual checkpoints only; the in-between months still shape the
        // final balances.
        if m % 12 == 0 {
            chart_data.push(TrajectoryPoint {
                month: m,
                year: m / 12,
                invested: round2(total_invested),
                nominal_value: round2(nominal_balance),
                real_value: round2(real_balance),
            });
        }
    }

    let nominal_gain = nominal_balance - total_invested;
    let real_gain = real_balance - total_invested;

    SimulationOutcome {
        summary: SimulationSummary {
            years: assumptions.time_horizon_years,
            total_invested: round2(total_invested),
            future_value_nominal: round2(nominal_balance),
            future_value_real: round2(real_balance),
            nominal_gain: round2(nominal_gain),
            real_gain: round2(real_gain),
            purchasing_power_loss: round2(nominal_balance - real_balance),
        },
        chart_data,
    }
}
