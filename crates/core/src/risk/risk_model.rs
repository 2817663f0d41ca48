//! Risk assessment domain models and scoring.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::users::{KycStatus, RiskProfile};

/// One assessment question with its scored options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskQuestion {
    pub question_id: i32,
    pub question: String,
    pub options: Vec<RiskQuestionOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskQuestionOption {
    pub text: String,
    pub score: i32,
}

/// One submitted answer: the chosen option's score for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i32,
    pub score: i32,
}

/// A submitted assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub answers: Vec<Answer>,
    pub kyc_status: KycStatus,
}

/// Outcome of scoring an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentResult {
    pub risk_score: i32,
    pub risk_profile: RiskProfile,
    pub kyc_status: KycStatus,
}

/// Maps a total assessment score to a risk profile.
///
/// 0-10 conservative, 11-18 moderate, 19+ aggressive. A negative total can
/// only come from malformed input and is rejected.
pub fn profile_for_score(total_score: i32) -> Result<RiskProfile, ValidationError> {
    match total_score {
        0..=10 => Ok(RiskProfile::Conservative),
        11..=18 => Ok(RiskProfile::Moderate),
        s if s >= 19 => Ok(RiskProfile::Aggressive),
        s => Err(ValidationError::InvalidInput(format!(
            "Invalid risk score: {}",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_map_to_profiles() {
        assert_eq!(profile_for_score(0).unwrap(), RiskProfile::Conservative);
        assert_eq!(profile_for_score(10).unwrap(), RiskProfile::Conservative);
        assert_eq!(profile_for_score(11).unwrap(), RiskProfile::Moderate);
        assert_eq!(profile_for_score(18).unwrap(), RiskProfile::Moderate);
        assert_eq!(profile_for_score(19).unwrap(), RiskProfile::Aggressive);
        assert_eq!(profile_for_score(30).unwrap(), RiskProfile::Aggressive);
    }

    #[test]
    fn negative_total_is_rejected() {
        assert!(profile_for_score(-1).is_err());
    }
}
