//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use crate::utils::{parse_decimal, utc_from_naive};
use nestegg_core::transactions::{Transaction, TransactionSide};

/// Database model for transactions. Rows are append-only.
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub side: String,
    pub quantity: String,
    pub price: String,
    pub fees: String,
    pub executed_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            side: db.side.parse::<TransactionSide>().unwrap_or(TransactionSide::Buy),
            quantity: parse_decimal(&db.quantity, "quantity"),
            price: parse_decimal(&db.price, "price"),
            fees: parse_decimal(&db.fees, "fees"),
            executed_at: utc_from_naive(db.executed_at),
        }
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            symbol: domain.symbol,
            side: domain.side.as_str().to_string(),
            quantity: domain.quantity.to_string(),
            price: domain.price.to_string(),
            fees: domain.fees.to_string(),
            executed_at: domain.executed_at.naive_utc(),
        }
    }
}
