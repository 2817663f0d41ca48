use async_trait::async_trait;

use crate::errors::Result;
use crate::risk::risk_model::{RiskAssessment, RiskAssessmentResult, RiskQuestion};

/// Trait for risk question repository operations
pub trait RiskQuestionRepositoryTrait: Send + Sync {
    fn list_questions(&self) -> Result<Vec<RiskQuestion>>;
}

/// Trait for risk service operations
#[async_trait]
pub trait RiskServiceTrait: Send + Sync {
    fn get_questions(&self) -> Result<Vec<RiskQuestion>>;

    /// Scores the submitted answers, derives the profile, and persists the
    /// outcome on the user record (marking the profile completed).
    async fn submit_assessment(
        &self,
        user_id: &str,
        assessment: RiskAssessment,
    ) -> Result<RiskAssessmentResult>;
}
