//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but the provider returned no usable price data.
    #[error("No price data available for {0}")]
    NoData(String),

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// Data validation failed.
    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MarketDataError {
    /// True when the error is terminal for the symbol (no retry, no
    /// alternate fetch path will help).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MarketDataError::SymbolNotFound(_) | MarketDataError::NoData(_)
        )
    }
}
