//! Market data models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest-price quote for one symbol.
///
/// `change`/`change_percent` are derived from the previous close when the
/// provider reports one.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Uppercased ticker symbol
    pub symbol: String,

    /// Last traded / regular market price
    pub price: Decimal,

    /// Previous session close, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,

    /// Absolute change vs previous close
    pub change: Decimal,

    /// Percentage change vs previous close
    pub change_percent: Decimal,

    /// Quote currency as reported by the provider
    pub currency: String,

    /// When the quote was produced
    pub updated_at: DateTime<Utc>,

    /// Source of the quote (e.g. "YAHOO")
    pub source: String,
}

impl PriceQuote {
    /// Build a quote, deriving change fields from the previous close.
    pub fn with_previous_close(
        symbol: &str,
        price: Decimal,
        previous_close: Option<Decimal>,
        currency: String,
        source: String,
    ) -> Self {
        let (change, change_percent) = match previous_close {
            Some(prev) if !prev.is_zero() => {
                let change = price - prev;
                (change, change / prev * Decimal::ONE_HUNDRED)
            }
            _ => (Decimal::ZERO, Decimal::ZERO),
        };
        Self {
            symbol: symbol.to_uppercase(),
            price,
            previous_close,
            change,
            change_percent,
            currency,
            updated_at: Utc::now(),
            source,
        }
    }
}
