use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::constants::REBALANCE_THRESHOLD_PCT;
use crate::errors::Result;
use crate::investments::{Investment, InvestmentRepositoryTrait};
use crate::recommendations::recommendations_model::{
    target_allocation, AllocationCategory, Recommendations, SuggestedAction, Suggestion,
};
use crate::recommendations::recommendations_traits::RecommendationServiceTrait;
use crate::users::UserRepositoryTrait;

/// Service computing allocation recommendations from the user's risk
/// profile and current holdings.
pub struct RecommendationService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl RecommendationService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            investment_repository,
        }
    }

    fn build(&self, investments: &[Investment], profile: crate::users::RiskProfile) -> Recommendations {
        let targets = target_allocation(profile);
        let threshold = Decimal::try_from(REBALANCE_THRESHOLD_PCT).unwrap_or(Decimal::from(5));

        let total: Decimal = investments.iter().map(|i| i.current_value).sum();

        let mut current_value: BTreeMap<AllocationCategory, Decimal> = AllocationCategory::ALL
            .iter()
            .map(|c| (*c, Decimal::ZERO))
            .collect();
        for inv in investments {
            let category = AllocationCategory::for_asset_type(inv.asset_type);
            *current_value.entry(category).or_insert(Decimal::ZERO) += inv.current_value;
        }

        let current_pct: BTreeMap<AllocationCategory, Decimal> = current_value
            .iter()
            .map(|(c, v)| {
                let pct = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (v / total * Decimal::ONE_HUNDRED).round_dp(1)
                };
                (*c, pct)
            })
            .collect();

        let mut suggestions = Vec::new();
        if total > Decimal::ZERO {
            for category in AllocationCategory::ALL {
                let target_pct = targets[&category];
                let pct = current_pct[&category];
                let diff = pct - target_pct;
                if diff.abs() < threshold {
                    continue;
                }

                let action = if diff > Decimal::ZERO {
                    SuggestedAction::Reduce
                } else {
                    SuggestedAction::Increase
                };
                let target_amount = total * target_pct / Decimal::ONE_HUNDRED;
                let change_amount = (target_amount - current_value[&category]).abs().round_dp(2);

                suggestions.push(Suggestion {
                    category: category.as_str().to_string(),
                    action,
                    message: format!(
                        "{} {} exposure by {}% (approx. {})",
                        action.as_str(),
                        category.display_name(),
                        diff.abs().round_dp(1),
                        change_amount
                    ),
                    reasoning: format!(
                        "Current: {}%, Target: {}%, Amount to move: {}",
                        pct, target_pct, change_amount
                    ),
                });
            }
        } else {
            suggestions.push(Suggestion {
                category: "general".to_string(),
                action: SuggestedAction::Invest,
                message: "Start investing to build your portfolio according to the recommended allocation.".to_string(),
                reasoning: "Portfolio is empty.".to_string(),
            });
        }

        Recommendations {
            risk_profile: profile,
            target_allocation: targets,
            current_allocation: current_pct,
            total_portfolio_value: total,
            suggestions,
        }
    }
}

impl RecommendationServiceTrait for RecommendationService {
    fn get_recommendations(&self, user_id: &str) -> Result<Recommendations> {
        let user = self.user_repository.get_by_id(user_id)?;
        let investments = self.investment_repository.list_for_user(user_id)?;
        Ok(self.build(&investments, user.risk_profile))
    }
}
