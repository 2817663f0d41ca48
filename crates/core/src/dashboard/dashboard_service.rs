use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::dashboard::dashboard_model::{
    AllocationSlice, DashboardSummary, HistoryPeriod, PortfolioHistoryPoint,
};
use crate::dashboard::dashboard_traits::{DashboardServiceTrait, PortfolioHistoryRepositoryTrait};
use crate::errors::Result;
use crate::goals::{GoalProgress, GoalServiceTrait};
use crate::investments::InvestmentRepositoryTrait;

/// Service aggregating portfolio state for the dashboard endpoints.
pub struct DashboardService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    history_repository: Arc<dyn PortfolioHistoryRepositoryTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
}

impl DashboardService {
    pub fn new(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        history_repository: Arc<dyn PortfolioHistoryRepositoryTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
    ) -> Self {
        Self {
            investment_repository,
            history_repository,
            goal_service,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_summary(&self, user_id: &str) -> Result<DashboardSummary> {
        let investments = self.investment_repository.list_for_user(user_id)?;
        Ok(DashboardSummary {
            invested: investments.iter().map(|i| i.cost_basis).sum(),
            current: investments.iter().map(|i| i.current_value).sum(),
        })
    }

    fn get_allocation(&self, user_id: &str) -> Result<Vec<AllocationSlice>> {
        let investments = self.investment_repository.list_for_user(user_id)?;
        let total: Decimal = investments.iter().map(|i| i.current_value).sum();

        // BTreeMap keeps slice order stable across calls.
        let mut by_type: BTreeMap<String, Decimal> = BTreeMap::new();
        for inv in &investments {
            *by_type
                .entry(inv.asset_type.display_name())
                .or_insert(Decimal::ZERO) += inv.current_value;
        }

        Ok(by_type
            .into_iter()
            .map(|(name, value)| {
                let percent = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (value / total * Decimal::ONE_HUNDRED).round_dp(2)
                };
                AllocationSlice {
                    name,
                    value,
                    percent,
                }
            })
            .collect())
    }

    fn get_history(
        &self,
        user_id: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<PortfolioHistoryPoint>> {
        let today = Utc::now().date_naive();
        let history = self
            .history_repository
            .list_since(user_id, period.start_date(today))?;
        if !history.is_empty() {
            return Ok(history);
        }

        // No snapshots yet: synthesize today's point from current holdings
        // so a brand-new portfolio still draws a chart.
        let summary = self.get_summary(user_id)?;
        if summary.invested.is_zero() && summary.current.is_zero() {
            return Ok(Vec::new());
        }
        Ok(vec![PortfolioHistoryPoint {
            date: today,
            total_value: summary.current,
            total_invested: summary.invested,
        }])
    }

    fn get_goals_progress(&self, user_id: &str) -> Result<Vec<GoalProgress>> {
        self.goal_service.get_goals_progress(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{Goal, NewGoal};
    use crate::investments::{AssetType, Investment, NewInvestment};
    use async_trait::async_trait;
    use chrono::{DateTime, NaiveDate};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockInvestmentRepository {
        investments: Vec<Investment>,
    }

    #[async_trait]
    impl InvestmentRepositoryTrait for MockInvestmentRepository {
        fn list_for_user(&self, _user_id: &str) -> Result<Vec<Investment>> {
            Ok(self.investments.clone())
        }
        fn get_by_id(&self, _: &str, _: &str) -> Result<Investment> {
            unimplemented!("Not needed for tests")
        }
        fn get_by_symbol(&self, _: &str, _: &str) -> Result<Option<Investment>> {
            unimplemented!("Not needed for tests")
        }
        async fn insert(&self, _: &str, _: NewInvestment) -> Result<Investment> {
            unimplemented!("Not needed for tests")
        }
        async fn update(&self, _: Investment) -> Result<Investment> {
            unimplemented!("Not needed for tests")
        }
        fn list_distinct_symbols(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }
        async fn apply_price(&self, _: &str, _: Decimal, _: DateTime<Utc>) -> Result<usize> {
            Ok(0)
        }
        fn totals_by_user(&self) -> Result<Vec<(String, Decimal, Decimal)>> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct MockHistoryRepository {
        points: Mutex<Vec<PortfolioHistoryPoint>>,
    }

    #[async_trait]
    impl PortfolioHistoryRepositoryTrait for MockHistoryRepository {
        fn list_since(
            &self,
            _user_id: &str,
            start: Option<NaiveDate>,
        ) -> Result<Vec<PortfolioHistoryPoint>> {
            Ok(self
                .points
                .lock()
                .unwrap()
                .iter()
                .filter(|p| start.map(|s| p.date >= s).unwrap_or(true))
                .cloned()
                .collect())
        }

        async fn upsert_point(
            &self,
            _: &str,
            date: NaiveDate,
            total_value: Decimal,
            total_invested: Decimal,
        ) -> Result<()> {
            self.points.lock().unwrap().push(PortfolioHistoryPoint {
                date,
                total_value,
                total_invested,
            });
            Ok(())
        }
    }

    struct MockGoalService;

    #[async_trait]
    impl GoalServiceTrait for MockGoalService {
        fn get_goals(&self, _: &str) -> Result<Vec<Goal>> {
            Ok(vec![])
        }
        async fn create_goal(&self, _: &str, _: NewGoal) -> Result<Goal> {
            unimplemented!("Not needed for tests")
        }
        async fn update_goal(&self, _: &str, _: &str, _: NewGoal) -> Result<Goal> {
            unimplemented!("Not needed for tests")
        }
        async fn delete_goal(&self, _: &str, _: &str) -> Result<usize> {
            unimplemented!("Not needed for tests")
        }
        fn get_goals_progress(&self, _: &str) -> Result<Vec<GoalProgress>> {
            Ok(vec![])
        }
    }

    fn holding(asset_type: AssetType, cost: Decimal, value: Decimal) -> Investment {
        Investment {
            id: format!("inv-{}", asset_type.as_str()),
            user_id: "user-1".to_string(),
            asset_type,
            symbol: asset_type.as_str().to_uppercase(),
            units: dec!(1),
            avg_buy_price: cost,
            cost_basis: cost,
            current_value: value,
            last_price: value,
            last_price_at: Utc::now(),
        }
    }

    fn service(investments: Vec<Investment>) -> DashboardService {
        DashboardService::new(
            Arc::new(MockInvestmentRepository { investments }),
            Arc::new(MockHistoryRepository::default()),
            Arc::new(MockGoalService),
        )
    }

    #[test]
    fn summary_totals_cost_and_value() {
        let svc = service(vec![
            holding(AssetType::Stock, dec!(1000), dec!(1200)),
            holding(AssetType::Bond, dec!(500), dec!(480)),
        ]);
        let summary = svc.get_summary("user-1").unwrap();
        assert_eq!(summary.invested, dec!(1500));
        assert_eq!(summary.current, dec!(1680));
    }

    #[test]
    fn allocation_groups_by_asset_type_with_percentages() {
        let svc = service(vec![
            holding(AssetType::Stock, dec!(100), dec!(750)),
            holding(AssetType::MutualFund, dec!(100), dec!(250)),
        ]);
        let slices = svc.get_allocation("user-1").unwrap();
        assert_eq!(slices.len(), 2);
        let fund = slices.iter().find(|s| s.name == "Mutual Fund").unwrap();
        assert_eq!(fund.percent, dec!(25.00));
        let stock = slices.iter().find(|s| s.name == "Stock").unwrap();
        assert_eq!(stock.value, dec!(750));
    }

    #[test]
    fn history_falls_back_to_current_totals() {
        let svc = service(vec![holding(AssetType::Etf, dec!(900), dec!(1000))]);
        let points = svc.get_history("user-1", HistoryPeriod::OneMonth).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total_value, dec!(1000));
        assert_eq!(points[0].total_invested, dec!(900));
    }

    #[test]
    fn empty_portfolio_history_is_empty() {
        let svc = service(vec![]);
        let points = svc.get_history("user-1", HistoryPeriod::All).unwrap();
        assert!(points.is_empty());
    }
}
