//! Database models for risk questions.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use nestegg_core::risk::{RiskQuestion, RiskQuestionOption};

/// Database model for risk questions. The three scored options are flat
/// columns; the domain model folds them into a list.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::risk_questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RiskQuestionDB {
    pub id: i32,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option1_score: i32,
    pub option2_score: i32,
    pub option3_score: i32,
}

impl From<RiskQuestionDB> for RiskQuestion {
    fn from(db: RiskQuestionDB) -> Self {
        Self {
            question_id: db.id,
            question: db.question,
            options: vec![
                RiskQuestionOption {
                    text: db.option1,
                    score: db.option1_score,
                },
                RiskQuestionOption {
                    text: db.option2,
                    score: db.option2_score,
                },
                RiskQuestionOption {
                    text: db.option3,
                    score: db.option3_score,
                },
            ],
        }
    }
}
