use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{Result, ValidationError};
use crate::risk::risk_model::{
    profile_for_score, RiskAssessment, RiskAssessmentResult, RiskQuestion,
};
use crate::risk::risk_traits::{RiskQuestionRepositoryTrait, RiskServiceTrait};
use crate::users::UserRepositoryTrait;

/// Service for the risk profiling flow.
pub struct RiskService {
    question_repository: Arc<dyn RiskQuestionRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl RiskService {
    pub fn new(
        question_repository: Arc<dyn RiskQuestionRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            question_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl RiskServiceTrait for RiskService {
    fn get_questions(&self) -> Result<Vec<RiskQuestion>> {
        self.question_repository.list_questions()
    }

    async fn submit_assessment(
        &self,
        user_id: &str,
        assessment: RiskAssessment,
    ) -> Result<RiskAssessmentResult> {
        if assessment.answers.is_empty() {
            return Err(ValidationError::MissingField("answers".to_string()).into());
        }

        let total_score: i32 = assessment.answers.iter().map(|a| a.score).sum();
        let risk_profile = profile_for_score(total_score)?;

        self.user_repository
            .apply_risk_assessment(user_id, total_score, risk_profile, assessment.kyc_status)
            .await?;

        info!(
            "Risk assessment for user {}: score {} -> {}",
            user_id,
            total_score,
            risk_profile.as_str()
        );

        Ok(RiskAssessmentResult {
            risk_score: total_score,
            risk_profile,
            kyc_status: assessment.kyc_status,
        })
    }
}
