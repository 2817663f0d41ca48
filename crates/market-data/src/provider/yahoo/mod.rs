//! Yahoo Finance market data provider.
//!
//! Fetches latest prices for equities, ETFs, and funds (e.g. AAPL, VTI,
//! VTSAX) through the Yahoo Finance chart API.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    fn map_yahoo_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
        if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
            MarketDataError::SymbolNotFound(symbol.to_string())
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
        // A few daily bars so the previous close is available for the
        // change/changePercent derivation.
        let response = self
            .connector
            .get_quote_range(symbol, "1d", "5d")
            .await
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        let bars = response
            .quotes()
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        let last = bars
            .last()
            .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))?;

        let price = Decimal::from_f64_retain(last.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!("Failed to convert close price {} to Decimal", last.close),
            }
        })?;

        let previous_close = if bars.len() >= 2 {
            Decimal::from_f64_retain(bars[bars.len() - 2].close)
        } else {
            // Single bar: fall back to the session open so intraday change
            // still reads sensibly.
            Decimal::from_f64_retain(last.open)
        };

        let mut quote = PriceQuote::with_previous_close(
            symbol,
            price,
            previous_close,
            // Chart bars do not carry a currency; USD covers the listings
            // this backend tracks.
            "USD".to_string(),
            PROVIDER_ID.to_string(),
        );

        if let Some(ts) = Utc.timestamp_opt(last.timestamp as i64, 0).single() {
            quote.updated_at = ts;
        } else {
            warn!("Out-of-range quote timestamp {} for {}", last.timestamp, symbol);
        }

        debug!("Fetched {} = {} {}", quote.symbol, quote.price, quote.currency);
        Ok(quote)
    }
}
