//! Shared conversion helpers for DB models.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

/// Parses a TEXT decimal column. Monetary columns are written by this crate
/// exclusively, so a parse failure means a corrupted row; log it and fall
/// back to zero rather than failing the whole read.
pub fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}. Falling back to ZERO.", field_name, value, e);
            Decimal::ZERO
        }
    }
}

/// UTC timestamp from a naive DB value (all timestamps are stored as UTC).
pub fn utc_from_naive(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(naive, Utc)
}
