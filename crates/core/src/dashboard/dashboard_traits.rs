use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::dashboard::dashboard_model::{
    AllocationSlice, DashboardSummary, HistoryPeriod, PortfolioHistoryPoint,
};
use crate::errors::Result;
use crate::goals::GoalProgress;

/// Trait for portfolio history repository operations
#[async_trait]
pub trait PortfolioHistoryRepositoryTrait: Send + Sync {
    /// Points for a user from `start` (inclusive) onward, ascending by date.
    /// `None` means no lower bound.
    fn list_since(
        &self,
        user_id: &str,
        start: Option<NaiveDate>,
    ) -> Result<Vec<PortfolioHistoryPoint>>;

    /// Insert-or-replace one user's totals for a date. The price refresh job
    /// writes today's point for every user after each run.
    async fn upsert_point(
        &self,
        user_id: &str,
        date: NaiveDate,
        total_value: Decimal,
        total_invested: Decimal,
    ) -> Result<()>;
}

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    fn get_summary(&self, user_id: &str) -> Result<DashboardSummary>;
    fn get_allocation(&self, user_id: &str) -> Result<Vec<AllocationSlice>>;

    /// Growth chart history. Falls back to a single synthetic point built
    /// from current holdings when no history rows exist yet.
    fn get_history(
        &self,
        user_id: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<PortfolioHistoryPoint>>;

    fn get_goals_progress(&self, user_id: &str) -> Result<Vec<GoalProgress>>;
}
