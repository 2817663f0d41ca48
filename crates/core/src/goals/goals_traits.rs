use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgress, NewGoal};

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn list_active_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_by_id(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update(&self, user_id: &str, goal_id: &str, update: NewGoal) -> Result<Goal>;
    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, goal_id: &str, update: NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;

    /// Estimated progress for all active goals, ordered by target date.
    fn get_goals_progress(&self, user_id: &str) -> Result<Vec<GoalProgress>>;
}
