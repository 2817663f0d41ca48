//! Database models for portfolio history.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use crate::utils::parse_decimal;
use nestegg_core::dashboard::PortfolioHistoryPoint;

/// Database model for one user's portfolio totals on one date.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    Insertable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::portfolio_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHistoryDB {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub total_value: String,
    pub total_invested: String,
    pub created_at: NaiveDateTime,
}

impl From<PortfolioHistoryDB> for PortfolioHistoryPoint {
    fn from(db: PortfolioHistoryDB) -> Self {
        Self {
            date: db.date,
            total_value: parse_decimal(&db.total_value, "total_value"),
            total_invested: parse_decimal(&db.total_invested, "total_invested"),
        }
    }
}
