//! Dashboard domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invested-vs-current totals for the headline chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub invested: Decimal,
    pub current: Decimal,
}

/// One slice of the allocation pie chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub name: String,
    pub value: Decimal,
    pub percent: Decimal,
}

/// One point of the portfolio growth chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHistoryPoint {
    pub date: NaiveDate,
    pub total_value: Decimal,
    pub total_invested: Decimal,
}

/// Lookback window for the growth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPeriod {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    All,
}

impl HistoryPeriod {
    /// Parses the query value; anything unrecognized falls back to 1M,
    /// matching the permissive query handling of the dashboard endpoints.
    pub fn parse(s: &str) -> Self {
        match s {
            "3M" => HistoryPeriod::ThreeMonths,
            "6M" => HistoryPeriod::SixMonths,
            "1Y" => HistoryPeriod::OneYear,
            "ALL" => HistoryPeriod::All,
            _ => HistoryPeriod::OneMonth,
        }
    }

    /// Window start, or `None` for the unbounded ALL period.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        let days = match self {
            HistoryPeriod::OneMonth => 30,
            HistoryPeriod::ThreeMonths => 90,
            HistoryPeriod::SixMonths => 180,
            HistoryPeriod::OneYear => 365,
            HistoryPeriod::All => return None,
        };
        Some(today - chrono::Duration::days(days))
    }
}
