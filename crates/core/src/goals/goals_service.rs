use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalProgress, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Service for managing financial goals.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goal_repository }
    }

    fn validate(new_goal: &NewGoal) -> Result<()> {
        if new_goal.target_amount <= 0.0 || !new_goal.target_amount.is_finite() {
            return Err(ValidationError::InvalidInput(
                "Target amount must be a positive number".to_string(),
            )
            .into());
        }
        if new_goal.monthly_contribution < 0.0 || !new_goal.monthly_contribution.is_finite() {
            return Err(ValidationError::InvalidInput(
                "Monthly contribution cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repository.list_for_user(user_id)
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        Self::validate(&new_goal)?;
        self.goal_repository.insert(user_id, new_goal).await
    }

    async fn update_goal(&self, user_id: &str, goal_id: &str, update: NewGoal) -> Result<Goal> {
        Self::validate(&update)?;
        self.goal_repository.update(user_id, goal_id, update).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        self.goal_repository.delete(user_id, goal_id).await
    }

    fn get_goals_progress(&self, user_id: &str) -> Result<Vec<GoalProgress>> {
        let today = Utc::now().date_naive();
        let mut goals = self.goal_repository.list_active_for_user(user_id)?;
        goals.sort_by_key(|g| g.target_date);
        Ok(goals.iter().map(|g| g.progress_at(today)).collect())
    }
}
