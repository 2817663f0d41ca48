//! Database models for simulations.
//!
//! Assumptions and results are stored as opaque JSON documents; the storage
//! layer only re-hydrates them into their typed forms on read.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::users::UserDB;
use crate::utils::utc_from_naive;
use nestegg_core::simulations::Simulation;
use nestegg_core::Result;

/// Database model for simulations
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::simulations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SimulationDB {
    pub id: String,
    pub user_id: String,
    pub goal_id: Option<String>,
    pub scenario_name: String,
    pub assumptions: String,
    pub results: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a simulation
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::simulations)]
pub struct NewSimulationDB {
    pub id: String,
    pub user_id: String,
    pub goal_id: Option<String>,
    pub scenario_name: String,
    pub assumptions: String,
    pub results: String,
    pub created_at: NaiveDateTime,
}

impl SimulationDB {
    pub fn into_domain(self) -> Result<Simulation> {
        let assumptions = serde_json::from_str(&self.assumptions)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        let results = serde_json::from_str(&self.results)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        Ok(Simulation {
            id: self.id,
            user_id: self.user_id,
            goal_id: self.goal_id,
            scenario_name: self.scenario_name,
            assumptions,
            results,
            created_at: utc_from_naive(self.created_at),
        })
    }
}
