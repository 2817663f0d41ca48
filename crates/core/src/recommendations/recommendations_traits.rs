use crate::errors::Result;
use crate::recommendations::recommendations_model::Recommendations;

/// Trait for recommendation service operations
pub trait RecommendationServiceTrait: Send + Sync {
    /// Builds allocation targets, the current allocation breakdown, and
    /// rebalancing suggestions for the user's risk profile.
    fn get_recommendations(&self, user_id: &str) -> Result<Recommendations>;
}
