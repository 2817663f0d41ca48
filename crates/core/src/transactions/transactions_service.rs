use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::Result;
use crate::investments::InvestmentRepositoryTrait;
use crate::transactions::reconciler::reconcile;
use crate::transactions::transactions_errors::TransactionError;
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionEvent, TransactionSide, TransactionSummary,
};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

/// Service for recording transactions and keeping positions reconciled.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            investment_repository,
        }
    }

    fn validate(new_transaction: &NewTransaction) -> Result<()> {
        if new_transaction.quantity <= Decimal::ZERO {
            return Err(TransactionError::InvalidQuantity.into());
        }
        if new_transaction.price <= Decimal::ZERO {
            return Err(TransactionError::InvalidPrice.into());
        }
        if new_transaction.fees < Decimal::ZERO {
            return Err(TransactionError::InvalidFees.into());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repository.list_for_user(user_id)
    }

    fn get_summary(&self, user_id: &str) -> Result<TransactionSummary> {
        let transactions = self.transaction_repository.list_for_user(user_id)?;
        let mut total_bought = Decimal::ZERO;
        let mut total_sold = Decimal::ZERO;
        let mut total_fees = Decimal::ZERO;
        for t in &transactions {
            match t.side {
                TransactionSide::Buy => total_bought += t.quantity * t.price,
                TransactionSide::Sell => total_sold += t.quantity * t.price,
                _ => {}
            }
            total_fees += t.fees;
        }
        Ok(TransactionSummary {
            total_transactions: transactions.len(),
            total_bought,
            total_sold,
            total_fees,
        })
    }

    async fn record_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        Self::validate(&new_transaction)?;

        let symbol = new_transaction.symbol.trim().to_uppercase();
        let event = TransactionEvent {
            user_id: user_id.to_string(),
            symbol: symbol.clone(),
            side: new_transaction.side,
            quantity: new_transaction.quantity,
            price: new_transaction.price,
            fees: new_transaction.fees,
            asset_type: new_transaction.asset_type,
            executed_at: Utc::now(),
        };

        let effect = if event.side.affects_position() {
            let existing = self.investment_repository.get_by_symbol(user_id, &symbol)?;
            Some(reconcile(existing.as_ref(), &event)?)
        } else {
            // Dividends and cash flows are recorded but do not reconcile.
            None
        };

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: event.user_id,
            symbol: event.symbol,
            side: event.side,
            quantity: event.quantity,
            price: event.price,
            fees: event.fees,
            executed_at: event.executed_at,
        };

        debug!(
            "Recording {} {} x {} for user {}",
            transaction.side.as_str(),
            transaction.quantity,
            transaction.symbol,
            user_id
        );

        self.transaction_repository
            .record_atomic(transaction, effect)
            .await
    }
}
