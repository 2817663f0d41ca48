//! Database models for investments.
//!
//! Monetary columns are stored as TEXT and round-trip through
//! `rust_decimal` so position arithmetic never loses precision to floats.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use crate::utils::{parse_decimal, utc_from_naive};
use nestegg_core::investments::{AssetType, Investment};

/// Database model for investments
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    Insertable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDB {
    pub id: String,
    pub user_id: String,
    pub asset_type: String,
    pub symbol: String,
    pub units: String,
    pub avg_buy_price: String,
    pub cost_basis: String,
    pub current_value: String,
    pub last_price: String,
    pub last_price_at: NaiveDateTime,
}

impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            asset_type: db.asset_type.parse::<AssetType>().unwrap_or_default(),
            symbol: db.symbol,
            units: parse_decimal(&db.units, "units"),
            avg_buy_price: parse_decimal(&db.avg_buy_price, "avg_buy_price"),
            cost_basis: parse_decimal(&db.cost_basis, "cost_basis"),
            current_value: parse_decimal(&db.current_value, "current_value"),
            last_price: parse_decimal(&db.last_price, "last_price"),
            last_price_at: utc_from_naive(db.last_price_at),
        }
    }
}

impl From<Investment> for InvestmentDB {
    fn from(domain: Investment) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            asset_type: domain.asset_type.as_str().to_string(),
            symbol: domain.symbol,
            units: domain.units.to_string(),
            avg_buy_price: domain.avg_buy_price.to_string(),
            cost_basis: domain.cost_basis.to_string(),
            current_value: domain.current_value.to_string(),
            last_price: domain.last_price.to_string(),
            last_price_at: domain.last_price_at.naive_utc(),
        }
    }
}
