//! Investment (position) domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a held asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    #[default]
    Stock,
    Etf,
    MutualFund,
    Bond,
    Cash,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Etf => "etf",
            AssetType::MutualFund => "mutual_fund",
            AssetType::Bond => "bond",
            AssetType::Cash => "cash",
        }
    }

    /// Human-readable label ("mutual_fund" -> "Mutual Fund").
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|w| {
                let mut c = w.chars();
                match c.next() {
                    Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::str::FromStr for AssetType {
    type Err = crate::errors::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock" => Ok(AssetType::Stock),
            "etf" => Ok(AssetType::Etf),
            "mutual_fund" => Ok(AssetType::MutualFund),
            "bond" => Ok(AssetType::Bond),
            "cash" => Ok(AssetType::Cash),
            other => Err(crate::errors::ValidationError::InvalidInput(format!(
                "Unknown asset type: {}",
                other
            ))),
        }
    }
}

/// Aggregate holding of one symbol for one user.
///
/// `avg_buy_price` is derived (`cost_basis / units`), recomputed on every buy
/// and left untouched on sells. `current_value` is a mark-to-market estimate
/// maintained by the price refresh job; the reconciler only seeds it with the
/// last transaction price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub asset_type: AssetType,
    pub symbol: String,
    pub units: Decimal,
    pub avg_buy_price: Decimal,
    pub cost_basis: Decimal,
    pub current_value: Decimal,
    pub last_price: Decimal,
    pub last_price_at: DateTime<Utc>,
}

/// Input model for manually adding an investment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub asset_type: AssetType,
    pub symbol: String,
    pub units: Decimal,
    pub avg_buy_price: Decimal,
    pub cost_basis: Decimal,
    pub current_value: Decimal,
    pub last_price: Decimal,
}

/// Portfolio-level aggregate over a user's investments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_investments: usize,
    pub total_invested: Decimal,
    pub total_value: Decimal,
    pub total_gain_loss: Decimal,
}
