//! Quotes module - price lookup and the periodic mark-to-market refresh.

mod quotes_model;
mod quotes_service;
mod quotes_traits;

pub use quotes_model::PriceRefreshOutcome;
pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteServiceTrait;

// The wire-level quote type comes from the market-data crate.
pub use nestegg_market_data::PriceQuote;
