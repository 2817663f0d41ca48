//! Investments module - holdings domain models, services, and traits.

mod investments_model;
mod investments_service;
mod investments_traits;

pub use investments_model::{AssetType, Investment, NewInvestment, PortfolioSummary};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
