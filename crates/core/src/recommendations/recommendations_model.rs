//! Recommendation domain models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::AssetType;
use crate::users::RiskProfile;

/// High-level allocation bucket an asset type maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationCategory {
    Equity,
    Debt,
    Cash,
}

impl AllocationCategory {
    pub const ALL: [AllocationCategory; 3] = [
        AllocationCategory::Equity,
        AllocationCategory::Debt,
        AllocationCategory::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationCategory::Equity => "equity",
            AllocationCategory::Debt => "debt",
            AllocationCategory::Cash => "cash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AllocationCategory::Equity => "Equity",
            AllocationCategory::Debt => "Debt",
            AllocationCategory::Cash => "Cash",
        }
    }

    /// Which bucket an asset type belongs to.
    pub fn for_asset_type(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Stock | AssetType::Etf | AssetType::MutualFund => {
                AllocationCategory::Equity
            }
            AssetType::Bond => AllocationCategory::Debt,
            AssetType::Cash => AllocationCategory::Cash,
        }
    }
}

/// Target allocation percentages for a risk profile.
/// Each row sums to 100.
pub fn target_allocation(profile: RiskProfile) -> BTreeMap<AllocationCategory, Decimal> {
    let (equity, debt, cash) = match profile {
        RiskProfile::Conservative => (20, 60, 20),
        RiskProfile::Moderate => (50, 40, 10),
        RiskProfile::Aggressive => (80, 15, 5),
    };
    BTreeMap::from([
        (AllocationCategory::Equity, Decimal::from(equity)),
        (AllocationCategory::Debt, Decimal::from(debt)),
        (AllocationCategory::Cash, Decimal::from(cash)),
    ])
}

/// Direction of a rebalancing suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestedAction {
    Increase,
    Reduce,
    Invest,
}

impl SuggestedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestedAction::Increase => "Increase",
            SuggestedAction::Reduce => "Reduce",
            SuggestedAction::Invest => "Invest",
        }
    }
}

/// One rebalancing suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub category: String,
    pub action: SuggestedAction,
    pub message: String,
    pub reasoning: String,
}

/// Full recommendation document for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub risk_profile: RiskProfile,
    pub target_allocation: BTreeMap<AllocationCategory, Decimal>,
    pub current_allocation: BTreeMap<AllocationCategory, Decimal>,
    pub total_portfolio_value: Decimal,
    pub suggestions: Vec<Suggestion>,
}
