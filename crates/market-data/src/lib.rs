//! Nestegg Market Data Crate
//!
//! Provider-agnostic market data fetching for the Nestegg backend.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Latest-price quotes for equities, ETFs, and funds
//! - Batch fetching with per-symbol fallback
//! - An in-process TTL cache so repeated lookups within a refresh window
//!   do not hit the upstream provider
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> |   QuoteCache     |  (TTL, market-hours aware)
//! +------------------+     +------------------+
//!                                  |  miss
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Yahoo Finance)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   PriceQuote     |  (price, change, timestamp)
//!                          +------------------+
//! ```

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;

pub use cache::QuoteCache;
pub use errors::MarketDataError;
pub use models::PriceQuote;
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
