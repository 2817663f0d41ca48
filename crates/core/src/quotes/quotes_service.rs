use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};

use crate::dashboard::PortfolioHistoryRepositoryTrait;
use crate::errors::Result;
use crate::investments::InvestmentRepositoryTrait;
use crate::quotes::quotes_model::PriceRefreshOutcome;
use crate::quotes::quotes_traits::QuoteServiceTrait;
use nestegg_market_data::{MarketDataProvider, PriceQuote, QuoteCache};

/// Service bridging the domain layer and the market-data crate.
///
/// Owns the cache-then-provider lookup path and the scheduled refresh that
/// marks every position to market. The reconciler's own `current_value`
/// estimate is only a placeholder until this runs.
pub struct QuoteService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    history_repository: Arc<dyn PortfolioHistoryRepositoryTrait>,
    provider: Arc<dyn MarketDataProvider>,
    cache: Arc<QuoteCache>,
}

impl QuoteService {
    pub fn new(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        history_repository: Arc<dyn PortfolioHistoryRepositoryTrait>,
        provider: Arc<dyn MarketDataProvider>,
        cache: Arc<QuoteCache>,
    ) -> Self {
        Self {
            investment_repository,
            history_repository,
            provider,
            cache,
        }
    }

    async fn fetch_through_cache(&self, symbol: &str) -> Result<PriceQuote> {
        if let Some(cached) = self.cache.get(symbol) {
            return Ok(cached);
        }
        let quote = self.provider.latest_quote(symbol).await?;
        self.cache.insert(quote.clone());
        Ok(quote)
    }

    /// Writes today's portfolio totals for every user holding investments.
    async fn snapshot_portfolio_totals(&self) -> Result<()> {
        let today = Utc::now().date_naive();
        for (user_id, invested, value) in self.investment_repository.totals_by_user()? {
            self.history_repository
                .upsert_point(&user_id, today, value, invested)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_price(&self, symbol: &str) -> Result<PriceQuote> {
        self.fetch_through_cache(symbol).await
    }

    async fn refresh_all_prices(&self) -> Result<PriceRefreshOutcome> {
        let symbols = self.investment_repository.list_distinct_symbols()?;
        if symbols.is_empty() {
            info!("Price refresh: no investments to update");
            return Ok(PriceRefreshOutcome::default());
        }
        info!("Price refresh: {} unique symbols", symbols.len());

        // Serve what the cache still holds, batch-fetch the rest.
        let mut quotes: Vec<PriceQuote> = Vec::with_capacity(symbols.len());
        let mut missing: Vec<String> = Vec::new();
        for symbol in &symbols {
            match self.cache.get(symbol) {
                Some(cached) => quotes.push(cached),
                None => missing.push(symbol.clone()),
            }
        }

        let mut outcome = PriceRefreshOutcome::default();
        if !missing.is_empty() {
            for (symbol, fetched) in self.provider.latest_quotes(&missing).await {
                match fetched {
                    Some(quote) => {
                        self.cache.insert(quote.clone());
                        quotes.push(quote);
                    }
                    None => {
                        warn!("Price refresh: no quote for {}", symbol);
                        outcome.failed += 1;
                    }
                }
            }
        }

        for quote in &quotes {
            let rows = self
                .investment_repository
                .apply_price(&quote.symbol, quote.price, quote.updated_at)
                .await?;
            outcome.updated += rows;
        }

        // History snapshot reflects the freshly marked values.
        self.snapshot_portfolio_totals().await?;

        info!(
            "Price refresh complete: {} rows updated, {} symbols failed",
            outcome.updated, outcome.failed
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::PortfolioHistoryPoint;
    use crate::investments::{Investment, NewInvestment};
    use chrono::{DateTime, NaiveDate};
    use nestegg_market_data::MarketDataError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn latest_quote(&self, symbol: &str) -> std::result::Result<PriceQuote, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if symbol == "DEAD" {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            Ok(PriceQuote::with_previous_close(
                symbol,
                dec!(50),
                Some(dec!(49)),
                "USD".to_string(),
                "MOCK".to_string(),
            ))
        }
    }

    struct MockInvestmentRepository {
        symbols: Vec<String>,
        rows_per_symbol: usize,
    }

    #[async_trait]
    impl InvestmentRepositoryTrait for MockInvestmentRepository {
        fn list_for_user(&self, _: &str) -> Result<Vec<Investment>> {
            Ok(vec![])
        }
        fn get_by_id(&self, _: &str, _: &str) -> Result<Investment> {
            unimplemented!("Not needed for tests")
        }
        fn get_by_symbol(&self, _: &str, _: &str) -> Result<Option<Investment>> {
            unimplemented!("Not needed for tests")
        }
        async fn insert(&self, _: &str, _: NewInvestment) -> Result<Investment> {
            unimplemented!("Not needed for tests")
        }
        async fn update(&self, _: Investment) -> Result<Investment> {
            unimplemented!("Not needed for tests")
        }
        fn list_distinct_symbols(&self) -> Result<Vec<String>> {
            Ok(self.symbols.clone())
        }
        async fn apply_price(&self, _: &str, _: Decimal, _: DateTime<Utc>) -> Result<usize> {
            Ok(self.rows_per_symbol)
        }
        fn totals_by_user(&self) -> Result<Vec<(String, Decimal, Decimal)>> {
            Ok(vec![("user-1".to_string(), dec!(100), dec!(120))])
        }
    }

    #[derive(Default)]
    struct MockHistoryRepository {
        points: Mutex<Vec<(String, NaiveDate)>>,
    }

    #[async_trait]
    impl PortfolioHistoryRepositoryTrait for MockHistoryRepository {
        fn list_since(
            &self,
            _: &str,
            _: Option<NaiveDate>,
        ) -> Result<Vec<PortfolioHistoryPoint>> {
            Ok(vec![])
        }
        async fn upsert_point(
            &self,
            user_id: &str,
            date: NaiveDate,
            _: Decimal,
            _: Decimal,
        ) -> Result<()> {
            self.points.lock().unwrap().push((user_id.to_string(), date));
            Ok(())
        }
    }

    fn service(
        symbols: Vec<&str>,
    ) -> (QuoteService, Arc<MockProvider>, Arc<MockHistoryRepository>) {
        let provider = Arc::new(MockProvider {
            calls: AtomicUsize::new(0),
        });
        let history = Arc::new(MockHistoryRepository::default());
        let svc = QuoteService::new(
            Arc::new(MockInvestmentRepository {
                symbols: symbols.into_iter().map(String::from).collect(),
                rows_per_symbol: 2,
            }),
            history.clone(),
            provider.clone(),
            Arc::new(QuoteCache::new()),
        );
        (svc, provider, history)
    }

    #[tokio::test]
    async fn get_price_hits_cache_on_second_lookup() {
        let (svc, provider, _) = service(vec![]);
        svc.get_price("AAPL").await.unwrap();
        svc.get_price("AAPL").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_counts_updates_and_failures() {
        let (svc, _, history) = service(vec!["AAPL", "DEAD", "VTI"]);
        let outcome = svc.refresh_all_prices().await.unwrap();
        assert_eq!(outcome.updated, 4); // 2 rows x 2 good symbols
        assert_eq!(outcome.failed, 1);
        // history snapshot written after the refresh
        assert_eq!(history.points.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn refresh_with_no_investments_is_a_noop() {
        let (svc, provider, history) = service(vec![]);
        let outcome = svc.refresh_all_prices().await.unwrap();
        assert_eq!(outcome, PriceRefreshOutcome::default());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(history.points.lock().unwrap().is_empty());
    }
}
