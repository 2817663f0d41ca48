use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::investments::investments_model::{Investment, NewInvestment, PortfolioSummary};

/// Trait for investment repository operations
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Investment>>;
    fn get_by_id(&self, user_id: &str, investment_id: &str) -> Result<Investment>;
    fn get_by_symbol(&self, user_id: &str, symbol: &str) -> Result<Option<Investment>>;
    async fn insert(&self, user_id: &str, new_investment: NewInvestment) -> Result<Investment>;
    async fn update(&self, investment: Investment) -> Result<Investment>;

    /// Distinct symbols across all users, for the price refresh job.
    fn list_distinct_symbols(&self) -> Result<Vec<String>>;

    /// Marks every position holding `symbol` to `price`
    /// (`current_value = units * price`). Returns the number of rows touched.
    async fn apply_price(
        &self,
        symbol: &str,
        price: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<usize>;

    /// Per-user (total cost basis, total current value) pairs across all
    /// users, for the portfolio history snapshot.
    fn totals_by_user(&self) -> Result<Vec<(String, Decimal, Decimal)>>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn get_investments(&self, user_id: &str) -> Result<Vec<Investment>>;
    fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary>;
    async fn create_investment(
        &self,
        user_id: &str,
        new_investment: NewInvestment,
    ) -> Result<Investment>;
    async fn update_investment(
        &self,
        user_id: &str,
        investment_id: &str,
        update: NewInvestment,
    ) -> Result<Investment>;
}
