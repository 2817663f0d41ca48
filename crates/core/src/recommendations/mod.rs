//! Recommendations module - target allocations per risk profile and
//! rebalancing suggestions.

mod recommendations_model;
mod recommendations_service;
mod recommendations_traits;

pub use recommendations_model::{
    target_allocation, AllocationCategory, Recommendations, SuggestedAction, Suggestion,
};
pub use recommendations_service::RecommendationService;
pub use recommendations_traits::RecommendationServiceTrait;
