//! In-process TTL cache for price quotes.
//!
//! Replaces an external cache process with an injected object owned by the
//! composition root. TTL is shorter during US market hours, when prices move.

use std::time::{Duration, Instant};

use chrono::{Datelike, Timelike, Utc};
use dashmap::DashMap;

use crate::models::PriceQuote;

/// Cache TTL while the US market is open
const CACHE_TTL_MARKET: Duration = Duration::from_secs(900);

/// Cache TTL outside market hours
const CACHE_TTL_OFF_HOURS: Duration = Duration::from_secs(3600);

struct CacheEntry {
    quote: PriceQuote,
    inserted_at: Instant,
    ttl: Duration,
}

/// Concurrent quote cache keyed by uppercased symbol.
///
/// Expired entries are evicted lazily on read.
#[derive(Default)]
pub struct QuoteCache {
    entries: DashMap<String, CacheEntry>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached quote for `symbol` if present and not expired.
    pub fn get(&self, symbol: &str) -> Option<PriceQuote> {
        let key = symbol.to_uppercase();
        if let Some(entry) = self.entries.get(&key) {
            if entry.inserted_at.elapsed() < entry.ttl {
                return Some(entry.quote.clone());
            }
        }
        // Expired: drop the stale entry before reporting a miss.
        self.entries
            .remove_if(&key, |_, e| e.inserted_at.elapsed() >= e.ttl);
        None
    }

    /// Caches a quote under its symbol with a TTL based on market hours.
    pub fn insert(&self, quote: PriceQuote) {
        let ttl = if is_us_market_hours() {
            CACHE_TTL_MARKET
        } else {
            CACHE_TTL_OFF_HOURS
        };
        self.entries.insert(
            quote.symbol.clone(),
            CacheEntry {
                quote,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Drops a cached symbol, forcing the next lookup to hit the provider.
    pub fn invalidate(&self, symbol: &str) {
        self.entries.remove(&symbol.to_uppercase());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Simplified US market-hours check: weekdays, 14:00-21:00 UTC.
/// Regular session is 14:30-21:00 UTC; the extra half hour only shortens
/// the TTL, never lengthens it.
fn is_us_market_hours() -> bool {
    let now = Utc::now();
    if now.weekday().number_from_monday() > 5 {
        return false;
    }
    (14..21).contains(&now.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(symbol: &str, price: rust_decimal::Decimal) -> PriceQuote {
        PriceQuote::with_previous_close(
            symbol,
            price,
            None,
            "USD".to_string(),
            "TEST".to_string(),
        )
    }

    #[test]
    fn get_returns_inserted_quote_case_insensitive() {
        let cache = QuoteCache::new();
        cache.insert(quote("aapl", dec!(187.50)));

        let hit = cache.get("AAPL").expect("cache hit");
        assert_eq!(hit.symbol, "AAPL");
        assert_eq!(hit.price, dec!(187.50));
        // lower-case lookup resolves to the same entry
        assert!(cache.get("aapl").is_some());
    }

    #[test]
    fn invalidate_forces_miss() {
        let cache = QuoteCache::new();
        cache.insert(quote("MSFT", dec!(402.11)));
        cache.invalidate("msft");
        assert!(cache.get("MSFT").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn change_fields_derive_from_previous_close() {
        let q = PriceQuote::with_previous_close(
            "VTI",
            dec!(220.00),
            Some(dec!(200.00)),
            "USD".to_string(),
            "TEST".to_string(),
        );
        assert_eq!(q.change, dec!(20.00));
        assert_eq!(q.change_percent, dec!(10.00));
    }
}
