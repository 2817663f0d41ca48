use thiserror::Error;

/// Business-rule violations raised while validating or reconciling a
/// transaction event.
///
/// These are terminal for the event being processed: the caller rejects the
/// whole operation and nothing is persisted. None of them are transient, so
/// retrying is never appropriate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Fees cannot be negative")]
    InvalidFees,

    #[error("Insufficient units to sell")]
    InsufficientUnits,
}
