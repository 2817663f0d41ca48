use std::sync::Arc;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use nestegg_core::risk::{RiskQuestion, RiskQuestionRepositoryTrait};
use nestegg_core::Result;

use super::model::RiskQuestionDB;
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::risk_questions::dsl::*;

/// Read-only repository over the seeded questionnaire.
pub struct RiskQuestionRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl RiskQuestionRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        RiskQuestionRepository { pool }
    }
}

impl RiskQuestionRepositoryTrait for RiskQuestionRepository {
    fn list_questions(&self) -> Result<Vec<RiskQuestion>> {
        let mut conn = get_connection(&self.pool)?;
        let questions_db = risk_questions
            .order(id.asc())
            .load::<RiskQuestionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(questions_db.into_iter().map(RiskQuestion::from).collect())
    }
}
