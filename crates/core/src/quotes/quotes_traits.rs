use async_trait::async_trait;

use crate::errors::Result;
use crate::quotes::quotes_model::PriceRefreshOutcome;
use nestegg_market_data::PriceQuote;

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Latest price for one symbol, served from the cache when fresh.
    async fn get_price(&self, symbol: &str) -> Result<PriceQuote>;

    /// Refreshes `last_price`/`current_value` on every investment row across
    /// all users, then records today's per-user portfolio totals.
    async fn refresh_all_prices(&self) -> Result<PriceRefreshOutcome>;
}
