use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use nestegg_core::users::{KycStatus, NewUser, RiskProfile, User, UserRepositoryTrait};
use nestegg_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;

pub struct UserRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(user_db))
    }

    fn find_by_email(&self, user_email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .filter(email.eq(user_email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn credentials_by_email(&self, user_email: &str) -> Result<Option<(User, String)>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .filter(email.eq(user_email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(|db| {
            let hash = db.password_hash.clone();
            (User::from(db), hash)
        }))
    }

    fn password_hash(&self, user_id: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        let hash = users
            .find(user_id)
            .select(password_hash)
            .first::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(hash)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db =
                    NewUserDB::from_domain(new_user, Uuid::new_v4().to_string());
                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    async fn update_name(&self, user_id: &str, new_name: String) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::update(users.find(&user_id))
                    .set(name.eq(new_name))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    async fn update_password_hash(&self, user_id: &str, new_hash: String) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(users.find(&user_id))
                    .set(password_hash.eq(new_hash))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn apply_risk_assessment(
        &self,
        user_id: &str,
        assessment_score: i32,
        profile: RiskProfile,
        kyc: KycStatus,
    ) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::update(users.find(&user_id))
                    .set((
                        risk_score.eq(Some(assessment_score)),
                        risk_profile.eq(profile.as_str()),
                        kyc_status.eq(kyc.as_str()),
                        profile_completed.eq(true),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }
}
