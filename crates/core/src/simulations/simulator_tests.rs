use crate::simulations::simulations_model::SimulationAssumptions;
use crate::simulations::simulator::simulate;

fn assumptions(
    initial: f64,
    monthly: f64,
    years: u32,
    return_rate: f64,
    inflation: f64,
) -> SimulationAssumptions {
    SimulationAssumptions {
        initial_amount: initial,
        monthly_contribution: monthly,
        time_horizon_years: years,
        expected_return_rate: return_rate,
        inflation_rate: inflation,
    }
}

#[test]
fn zero_rates_and_no_contribution_is_the_identity() {
    for years in [1, 7, 30] {
        let outcome = simulate(&assumptions(12345.67, 0.0, years, 0.0, 0.0));
        assert_eq!(outcome.summary.future_value_nominal, 12345.67);
        assert_eq!(outcome.summary.future_value_real, 12345.67);
        assert_eq!(outcome.summary.total_invested, 12345.67);
        assert_eq!(outcome.summary.nominal_gain, 0.0);
        assert_eq!(outcome.summary.real_gain, 0.0);
        assert_eq!(outcome.summary.purchasing_power_loss, 0.0);
    }
}

#[test]
fn reference_scenario_ten_years() {
    // 10y, 10k initial, 500/month, 7% return, 3% inflation
    let outcome = simulate(&assumptions(10_000.0, 500.0, 10, 7.0, 3.0));
    let summary = &outcome.summary;

    assert_eq!(summary.total_invested, 70_000.0); // 10000 + 500 * 120
    assert!(summary.future_value_nominal > summary.total_invested);
    assert!(summary.future_value_real < summary.future_value_nominal);
    assert!(summary.purchasing_power_loss > 0.0);

    // summary figures tie back to the last chart point
    let last = outcome.chart_data.last().unwrap();
    assert_eq!(last.month, 120);
    assert_eq!(last.year, 10);
    assert_eq!(last.invested, summary.total_invested);
    assert_eq!(last.nominal_value, summary.future_value_nominal);
    assert_eq!(last.real_value, summary.future_value_real);
}

#[test]
fn trajectory_has_one_point_per_year_plus_month_zero() {
    for years in [0u32, 1, 5, 40] {
        let outcome = simulate(&assumptions(1000.0, 100.0, years, 6.0, 2.0));
        assert_eq!(outcome.chart_data.len(), years as usize + 1);
        for (i, point) in outcome.chart_data.iter().enumerate() {
            assert_eq!(point.year, i as u32);
            assert_eq!(point.month, i as u32 * 12);
        }
    }
}

#[test]
fn zero_year_horizon_emits_only_the_starting_point() {
    let outcome = simulate(&assumptions(5000.0, 250.0, 0, 7.0, 3.0));
    assert_eq!(outcome.chart_data.len(), 1);
    assert_eq!(outcome.summary.future_value_nominal, 5000.0);
    assert_eq!(outcome.summary.future_value_real, 5000.0);
    assert_eq!(outcome.summary.nominal_gain, 0.0);
    assert_eq!(outcome.summary.real_gain, 0.0);
}

#[test]
fn negative_return_declines_instead_of_erroring() {
    let outcome = simulate(&assumptions(10_000.0, 0.0, 5, -4.0, 0.0));
    assert!(outcome.summary.future_value_nominal < 10_000.0);
    assert!(outcome.summary.nominal_gain < 0.0);
    // Still monotonically decreasing year over year
    for pair in outcome.chart_data.windows(2) {
        assert!(pair[1].nominal_value < pair[0].nominal_value);
    }
}

#[test]
fn contributions_without_growth_accumulate_linearly() {
    let outcome = simulate(&assumptions(0.0, 100.0, 3, 0.0, 0.0));
    assert_eq!(outcome.summary.total_invested, 3600.0);
    assert_eq!(outcome.summary.future_value_nominal, 3600.0);
    assert_eq!(outcome.chart_data[1].nominal_value, 1200.0);
    assert_eq!(outcome.chart_data[2].nominal_value, 2400.0);
}

#[test]
fn inflation_discounts_with_annual_compounding_of_elapsed_years() {
    // One year, no growth, no contributions: real value after 12 months is
    // exactly initial / 1.03.
    let outcome = simulate(&assumptions(10_300.0, 0.0, 1, 0.0, 3.0));
    let last = outcome.chart_data.last().unwrap();
    assert_eq!(last.nominal_value, 10_300.0);
    assert!((last.real_value - 10_000.0).abs() < 0.01);
}

#[test]
fn growth_compounds_monthly_on_the_simple_rate() {
    // 12% annual -> 1% per month, one year on 1000 with no contributions:
    // 1000 * 1.01^12
    let outcome = simulate(&assumptions(1000.0, 0.0, 1, 12.0, 0.0));
    let expected = 1000.0 * 1.01f64.powi(12);
    assert!((outcome.summary.future_value_nominal - expected).abs() < 0.01);
}
