use async_trait::async_trait;

use crate::errors::Result;
use crate::transactions::reconciler::PositionEffect;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionSummary};

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Persists the transaction row and applies the position effect (if any)
    /// inside one database transaction. Either both succeed or neither does.
    async fn record_atomic(
        &self,
        transaction: Transaction,
        effect: Option<PositionEffect>,
    ) -> Result<Transaction>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_summary(&self, user_id: &str) -> Result<TransactionSummary>;

    /// Validates the event, runs the reconciler against the current position,
    /// and persists event + position delta atomically.
    async fn record_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
}
