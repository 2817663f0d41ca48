//! Market data provider trait definitions.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO".
    /// Used for logging and quote attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a single symbol.
    async fn latest_quote(&self, symbol: &str) -> Result<PriceQuote, MarketDataError>;

    /// Fetch latest quotes for multiple symbols.
    ///
    /// The default implementation fetches symbols one by one; a symbol that
    /// fails maps to `None` rather than failing the whole batch, so one
    /// delisted ticker cannot stall a refresh run.
    async fn latest_quotes(
        &self,
        symbols: &[String],
    ) -> HashMap<String, Option<PriceQuote>> {
        let mut results = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let key = symbol.to_uppercase();
            match self.latest_quote(symbol).await {
                Ok(quote) => {
                    results.insert(key, Some(quote));
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch quote for {}: {}", symbol, e);
                    results.insert(key, None);
                }
            }
        }
        results
    }
}
