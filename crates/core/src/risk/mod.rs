//! Risk profiling module - assessment questions and scoring.

mod risk_model;
mod risk_service;
mod risk_traits;

pub use risk_model::{
    profile_for_score, Answer, RiskAssessment, RiskAssessmentResult, RiskQuestion, RiskQuestionOption,
};
pub use risk_service::RiskService;
pub use risk_traits::{RiskQuestionRepositoryTrait, RiskServiceTrait};
