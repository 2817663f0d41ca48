//! Transactions module - append-only trade events and the position
//! reconciler that folds them into investment rows.

mod reconciler;
#[cfg(test)]
mod reconciler_tests;
mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use reconciler::{reconcile, PositionEffect};
pub use transactions_errors::TransactionError;
pub use transactions_model::{
    NewTransaction, Transaction, TransactionEvent, TransactionSide, TransactionSummary,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
