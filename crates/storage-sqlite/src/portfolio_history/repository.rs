use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use uuid::Uuid;

use nestegg_core::dashboard::{PortfolioHistoryPoint, PortfolioHistoryRepositoryTrait};
use nestegg_core::Result;

use super::model::PortfolioHistoryDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::portfolio_history;
use crate::schema::portfolio_history::dsl::*;

pub struct PortfolioHistoryRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PortfolioHistoryRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PortfolioHistoryRepository { pool, writer }
    }
}

#[async_trait]
impl PortfolioHistoryRepositoryTrait for PortfolioHistoryRepository {
    fn list_since(
        &self,
        owner_id: &str,
        start: Option<NaiveDate>,
    ) -> Result<Vec<PortfolioHistoryPoint>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = portfolio_history
            .filter(user_id.eq(owner_id))
            .into_boxed();
        if let Some(start_date) = start {
            query = query.filter(date.ge(start_date));
        }
        let rows = query
            .order(date.asc())
            .load::<PortfolioHistoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PortfolioHistoryPoint::from).collect())
    }

    async fn upsert_point(
        &self,
        owner_id: &str,
        point_date: NaiveDate,
        value: Decimal,
        invested: Decimal,
    ) -> Result<()> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row = PortfolioHistoryDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: owner_id,
                    date: point_date,
                    total_value: value.to_string(),
                    total_invested: invested.to_string(),
                    created_at: chrono::Utc::now().naive_utc(),
                };
                // One row per (user, date): a re-run the same day replaces
                // the totals instead of appending.
                diesel::insert_into(portfolio_history::table)
                    .values(&row)
                    .on_conflict((user_id, date))
                    .do_update()
                    .set((
                        total_value.eq(&row.total_value),
                        total_invested.eq(&row.total_invested),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
