//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Investor risk appetite, derived from the risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Aggressive => "aggressive",
        }
    }
}

impl std::str::FromStr for RiskProfile {
    type Err = crate::errors::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" => Ok(RiskProfile::Moderate),
            "aggressive" => Ok(RiskProfile::Aggressive),
            other => Err(crate::errors::ValidationError::InvalidInput(format!(
                "Unknown risk profile: {}",
                other
            ))),
        }
    }
}

/// KYC verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    Unverified,
    Verified,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Unverified => "unverified",
            KycStatus::Verified => "verified",
        }
    }
}

impl std::str::FromStr for KycStatus {
    type Err = crate::errors::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unverified" => Ok(KycStatus::Unverified),
            "verified" => Ok(KycStatus::Verified),
            other => Err(crate::errors::ValidationError::InvalidInput(format!(
                "Unknown KYC status: {}",
                other
            ))),
        }
    }
}

/// Domain model representing a user account.
///
/// The password hash never leaves the storage/auth boundary; it is not part
/// of this model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub risk_profile: RiskProfile,
    pub kyc_status: KycStatus,
    pub risk_score: Option<i32>,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for registering a user. The password arrives already hashed;
/// plaintext handling (length rules, hashing) lives at the API boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub risk_profile: RiskProfile,
    pub kyc_status: KycStatus,
}
