use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::investments::investments_model::{Investment, NewInvestment, PortfolioSummary};
use crate::investments::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};

/// Service for managing investment rows directly.
///
/// Transaction-driven position changes go through the transactions module;
/// this service covers listing, portfolio summaries, and the manual
/// create/update passthrough.
pub struct InvestmentService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(investment_repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self {
            investment_repository,
        }
    }

    fn validate(new_investment: &NewInvestment) -> Result<()> {
        if new_investment.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if new_investment.units < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("Units cannot be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn get_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.investment_repository.list_for_user(user_id)
    }

    fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        let investments = self.investment_repository.list_for_user(user_id)?;
        let total_invested: Decimal = investments.iter().map(|i| i.cost_basis).sum();
        let total_value: Decimal = investments.iter().map(|i| i.current_value).sum();
        Ok(PortfolioSummary {
            total_investments: investments.len(),
            total_invested,
            total_value,
            total_gain_loss: total_value - total_invested,
        })
    }

    async fn create_investment(
        &self,
        user_id: &str,
        new_investment: NewInvestment,
    ) -> Result<Investment> {
        Self::validate(&new_investment)?;
        self.investment_repository
            .insert(user_id, new_investment)
            .await
    }

    async fn update_investment(
        &self,
        user_id: &str,
        investment_id: &str,
        update: NewInvestment,
    ) -> Result<Investment> {
        Self::validate(&update)?;
        // Ownership check happens here; a row belonging to another user
        // surfaces as NotFound.
        let existing = self.investment_repository.get_by_id(user_id, investment_id)?;
        let updated = Investment {
            id: existing.id,
            user_id: existing.user_id,
            asset_type: update.asset_type,
            symbol: update.symbol,
            units: update.units,
            avg_buy_price: update.avg_buy_price,
            cost_basis: update.cost_basis,
            current_value: update.current_value,
            last_price: update.last_price,
            last_price_at: chrono::Utc::now(),
        };
        self.investment_repository.update(updated).await
    }
}
