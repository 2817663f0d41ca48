//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::AssetType;

/// Side of a recorded transaction.
///
/// Only `Buy` and `Sell` feed the position reconciler; the cash-flow sides
/// are recorded for history but leave positions untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSide {
    Buy,
    Sell,
    Dividend,
    Contribution,
    Withdrawal,
}

impl TransactionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionSide::Buy => "buy",
            TransactionSide::Sell => "sell",
            TransactionSide::Dividend => "dividend",
            TransactionSide::Contribution => "contribution",
            TransactionSide::Withdrawal => "withdrawal",
        }
    }

    /// True when this side mutates a position.
    pub fn affects_position(&self) -> bool {
        matches!(self, TransactionSide::Buy | TransactionSide::Sell)
    }
}

impl std::str::FromStr for TransactionSide {
    type Err = crate::errors::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TransactionSide::Buy),
            "sell" => Ok(TransactionSide::Sell),
            "dividend" => Ok(TransactionSide::Dividend),
            "contribution" => Ok(TransactionSide::Contribution),
            "withdrawal" => Ok(TransactionSide::Withdrawal),
            other => Err(crate::errors::ValidationError::InvalidInput(format!(
                "Unknown transaction side: {}",
                other
            ))),
        }
    }
}

/// A recorded transaction. Immutable once persisted; only the derived
/// investment row changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub side: TransactionSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub fees: Decimal,
    pub executed_at: DateTime<Utc>,
}

/// Input model for recording a transaction.
///
/// `asset_type` classifies the investment row if this event creates one; it
/// is not stored on the transaction itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub symbol: String,
    pub side: TransactionSide,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub fees: Decimal,
    #[serde(default)]
    pub asset_type: AssetType,
}

/// A fully-resolved event handed to the reconciler: user and timestamp
/// attached, input validation already passed.
#[derive(Debug, Clone)]
pub struct TransactionEvent {
    pub user_id: String,
    pub symbol: String,
    pub side: TransactionSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub fees: Decimal,
    pub asset_type: AssetType,
    pub executed_at: DateTime<Utc>,
}

impl TransactionEvent {
    /// Total cash paid for a buy: `quantity * price + fees`.
    pub fn total_cost(&self) -> Decimal {
        self.quantity * self.price + self.fees
    }
}

/// Aggregate statistics over a user's transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_transactions: usize,
    pub total_bought: Decimal,
    pub total_sold: Decimal,
    pub total_fees: Decimal,
}
