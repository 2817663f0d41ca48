use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use nestegg_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use nestegg_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use crate::schema::goals::dsl::*;

pub struct GoalRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn list_active_for_user(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals
            .filter(user_id.eq(owner_id))
            .filter(status.eq("active"))
            .order(target_date.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_by_id(&self, owner_id: &str, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals
            .filter(id.eq(goal_id))
            .filter(user_id.eq(owner_id))
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::from(goal_db))
    }

    async fn insert(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db =
                    NewGoalDB::from_domain(new_goal, Uuid::new_v4().to_string(), owner_id);
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update(&self, owner_id: &str, goal_id: &str, update: NewGoal) -> Result<Goal> {
        let owner_id = owner_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let result_db = diesel::update(
                    goals
                        .filter(id.eq(&goal_id))
                        .filter(user_id.eq(&owner_id)),
                )
                .set((
                    goal_type.eq(update.goal_type.as_str()),
                    target_amount.eq(update.target_amount),
                    target_date.eq(update.target_date),
                    monthly_contribution.eq(update.monthly_contribution),
                    status.eq(update.status.as_str()),
                ))
                .returning(GoalDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn delete(&self, owner_id: &str, goal_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    goals
                        .filter(id.eq(&goal_id))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
