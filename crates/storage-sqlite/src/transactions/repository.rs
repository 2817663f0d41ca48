use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use nestegg_core::transactions::{PositionEffect, Transaction, TransactionRepositoryTrait};
use nestegg_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::investments::{delete_investment, upsert_investment};
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;

pub struct TransactionRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions
            .filter(user_id.eq(owner_id))
            .order(executed_at.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn record_atomic(
        &self,
        transaction: Transaction,
        effect: Option<PositionEffect>,
    ) -> Result<Transaction> {
        // The write actor runs this whole closure inside one immediate
        // transaction: the appended event and the position delta commit
        // together or not at all.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let db_model = TransactionDB::from(transaction);
                let inserted = diesel::insert_into(transactions::table)
                    .values(&db_model)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                match effect {
                    Some(PositionEffect::Upsert(investment)) => {
                        upsert_investment(conn, investment)?;
                    }
                    Some(PositionEffect::Delete { investment_id }) => {
                        delete_investment(conn, &investment_id)?;
                    }
                    None => {}
                }

                Ok(Transaction::from(inserted))
            })
            .await
    }
}
