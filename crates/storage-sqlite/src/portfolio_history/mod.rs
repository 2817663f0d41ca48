//! SQLite storage implementation for portfolio history snapshots.

mod model;
mod repository;

pub use model::PortfolioHistoryDB;
pub use repository::PortfolioHistoryRepository;
