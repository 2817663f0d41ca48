//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use crate::utils::utc_from_naive;
use nestegg_core::goals::{Goal, GoalStatus, GoalType, NewGoal};

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub monthly_contribution: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub monthly_contribution: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            goal_type: db.goal_type.parse::<GoalType>().unwrap_or(GoalType::Custom),
            target_amount: db.target_amount,
            target_date: db.target_date,
            monthly_contribution: db.monthly_contribution,
            status: db.status.parse::<GoalStatus>().unwrap_or_default(),
            created_at: utc_from_naive(db.created_at),
        }
    }
}

impl NewGoalDB {
    pub fn from_domain(domain: NewGoal, goal_id: String, owner_id: String) -> Self {
        Self {
            id: goal_id,
            user_id: owner_id,
            goal_type: domain.goal_type.as_str().to_string(),
            target_amount: domain.target_amount,
            target_date: domain.target_date,
            monthly_contribution: domain.monthly_contribution,
            status: domain.status.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
