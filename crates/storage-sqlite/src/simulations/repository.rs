use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use nestegg_core::simulations::{
    Simulation, SimulationAssumptions, SimulationOutcome, SimulationRepositoryTrait,
};
use nestegg_core::Result;

use super::model::{NewSimulationDB, SimulationDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::simulations;
use crate::schema::simulations::dsl::*;

pub struct SimulationRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SimulationRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        SimulationRepository { pool, writer }
    }
}

#[async_trait]
impl SimulationRepositoryTrait for SimulationRepository {
    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Simulation>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = simulations
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .load::<SimulationDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(SimulationDB::into_domain).collect()
    }

    async fn insert(
        &self,
        owner_id: &str,
        name: String,
        goal: Option<String>,
        sim_assumptions: SimulationAssumptions,
        sim_results: SimulationOutcome,
    ) -> Result<Simulation> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Simulation> {
                let new_db = NewSimulationDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: owner_id,
                    goal_id: goal,
                    scenario_name: name,
                    assumptions: serde_json::to_string(&sim_assumptions)
                        .map_err(|e| StorageError::SerializationError(e.to_string()))?,
                    results: serde_json::to_string(&sim_results)
                        .map_err(|e| StorageError::SerializationError(e.to_string()))?,
                    created_at: chrono::Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(simulations::table)
                    .values(&new_db)
                    .returning(SimulationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                inserted.into_domain()
            })
            .await
    }

    async fn delete(&self, owner_id: &str, simulation_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let simulation_id = simulation_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    simulations
                        .filter(id.eq(&simulation_id))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
