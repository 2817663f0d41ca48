use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use uuid::Uuid;

use nestegg_core::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use nestegg_core::Result;

use super::model::InvestmentDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::investments;
use crate::schema::investments::dsl::*;
use crate::utils::parse_decimal;

pub struct InvestmentRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        InvestmentRepository { pool, writer }
    }
}

/// Shared with the transaction repository so a reconciled position change
/// rides in the same write-actor transaction as the transaction insert.
pub(crate) fn upsert_investment(
    conn: &mut SqliteConnection,
    investment: Investment,
) -> Result<Investment> {
    let mut db_model = InvestmentDB::from(investment);
    if db_model.id.is_empty() {
        db_model.id = Uuid::new_v4().to_string();
        let inserted = diesel::insert_into(investments::table)
            .values(&db_model)
            .returning(InvestmentDB::as_returning())
            .get_result(conn)
            .map_err(StorageError::from)?;
        Ok(Investment::from(inserted))
    } else {
        let updated = diesel::update(investments.find(&db_model.id))
            .set(&db_model)
            .returning(InvestmentDB::as_returning())
            .get_result(conn)
            .map_err(StorageError::from)?;
        Ok(Investment::from(updated))
    }
}

pub(crate) fn delete_investment(conn: &mut SqliteConnection, investment_id: &str) -> Result<usize> {
    let deleted = diesel::delete(investments.find(investment_id))
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(deleted)
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investments
            .filter(user_id.eq(owner_id))
            .order(symbol.asc())
            .load::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Investment::from).collect())
    }

    fn get_by_id(&self, owner_id: &str, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        let row = investments
            .filter(id.eq(investment_id))
            .filter(user_id.eq(owner_id))
            .first::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Investment::from(row))
    }

    fn get_by_symbol(&self, owner_id: &str, ticker: &str) -> Result<Option<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let row = investments
            .filter(user_id.eq(owner_id))
            .filter(symbol.eq(ticker))
            .first::<InvestmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Investment::from))
    }

    async fn insert(&self, owner_id: &str, new_investment: NewInvestment) -> Result<Investment> {
        let investment = Investment {
            id: String::new(),
            user_id: owner_id.to_string(),
            asset_type: new_investment.asset_type,
            symbol: new_investment.symbol.trim().to_uppercase(),
            units: new_investment.units,
            avg_buy_price: new_investment.avg_buy_price,
            cost_basis: new_investment.cost_basis,
            current_value: new_investment.current_value,
            last_price: new_investment.last_price,
            last_price_at: Utc::now(),
        };
        self.writer
            .exec(move |conn: &mut SqliteConnection| upsert_investment(conn, investment))
            .await
    }

    async fn update(&self, investment: Investment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| upsert_investment(conn, investment))
            .await
    }

    fn list_distinct_symbols(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let symbols = investments
            .select(symbol)
            .distinct()
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(symbols)
    }

    async fn apply_price(
        &self,
        ticker: &str,
        price: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<usize> {
        let ticker = ticker.to_uppercase();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // current_value depends on each row's units, so rows are
                // rewritten individually inside this one transaction.
                let rows = investments
                    .filter(symbol.eq(&ticker))
                    .load::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;
                let count = rows.len();
                for row in rows {
                    let row_units = parse_decimal(&row.units, "units");
                    diesel::update(investments.find(&row.id))
                        .set((
                            last_price.eq(price.to_string()),
                            current_value.eq((row_units * price).to_string()),
                            last_price_at.eq(as_of.naive_utc()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(count)
            })
            .await
    }

    fn totals_by_user(&self) -> Result<Vec<(String, Decimal, Decimal)>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investments
            .load::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;

        let mut totals: Vec<(String, Decimal, Decimal)> = Vec::new();
        for row in rows {
            let invested = parse_decimal(&row.cost_basis, "cost_basis");
            let value = parse_decimal(&row.current_value, "current_value");
            match totals.iter_mut().find(|(u, _, _)| *u == row.user_id) {
                Some((_, inv, val)) => {
                    *inv += invested;
                    *val += value;
                }
                None => totals.push((row.user_id, invested, value)),
            }
        }
        Ok(totals)
    }
}
