use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{KycStatus, NewUser, RiskProfile, User};

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// User plus stored password hash, for credential verification at the
    /// auth boundary.
    fn credentials_by_email(&self, email: &str) -> Result<Option<(User, String)>>;

    /// Stored password hash for an existing user (password-change flow).
    fn password_hash(&self, user_id: &str) -> Result<String>;

    async fn insert(&self, new_user: NewUser) -> Result<User>;
    async fn update_name(&self, user_id: &str, name: String) -> Result<User>;
    async fn update_password_hash(&self, user_id: &str, password_hash: String) -> Result<()>;

    /// Applies a completed risk assessment: score, derived profile, KYC
    /// status, and the profile_completed flag in one update.
    async fn apply_risk_assessment(
        &self,
        user_id: &str,
        risk_score: i32,
        risk_profile: RiskProfile,
        kyc_status: KycStatus,
    ) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn credentials_by_email(&self, email: &str) -> Result<Option<(User, String)>>;
    fn password_hash(&self, user_id: &str) -> Result<String>;
    async fn register(&self, new_user: NewUser) -> Result<User>;
    async fn update_name(&self, user_id: &str, name: String) -> Result<User>;
    async fn update_password_hash(&self, user_id: &str, password_hash: String) -> Result<()>;
}
