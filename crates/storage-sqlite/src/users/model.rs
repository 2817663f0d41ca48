//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::utc_from_naive;
use nestegg_core::users::{KycStatus, NewUser, RiskProfile, User};

/// Database model for users
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub risk_profile: String,
    pub kyc_status: String,
    pub risk_score: Option<i32>,
    pub profile_completed: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub risk_profile: String,
    pub kyc_status: String,
    pub profile_completed: bool,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            // Unknown values cannot be written through this crate; fall back
            // to the schema defaults if a row was edited out-of-band.
            risk_profile: db.risk_profile.parse::<RiskProfile>().unwrap_or_default(),
            kyc_status: db.kyc_status.parse::<KycStatus>().unwrap_or_default(),
            risk_score: db.risk_score,
            profile_completed: db.profile_completed,
            created_at: utc_from_naive(db.created_at),
        }
    }
}

impl NewUserDB {
    pub fn from_domain(domain: NewUser, id: String) -> Self {
        Self {
            id,
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            risk_profile: domain.risk_profile.as_str().to_string(),
            kyc_status: domain.kyc_status.as_str().to_string(),
            profile_completed: false,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
