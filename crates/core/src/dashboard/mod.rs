//! Dashboard module - portfolio aggregation for the overview charts.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::{
    AllocationSlice, DashboardSummary, HistoryPeriod, PortfolioHistoryPoint,
};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardServiceTrait, PortfolioHistoryRepositoryTrait};
