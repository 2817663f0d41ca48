use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{Error, Result, ValidationError};
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Service for managing user accounts.
///
/// Password hashing and verification happen in the server's auth layer;
/// this service only ever sees hashes.
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository.get_by_id(user_id)
    }

    fn credentials_by_email(&self, email: &str) -> Result<Option<(User, String)>> {
        self.user_repository
            .credentials_by_email(&email.trim().to_lowercase())
    }

    fn password_hash(&self, user_id: &str) -> Result<String> {
        self.user_repository.password_hash(user_id)
    }

    async fn register(&self, mut new_user: NewUser) -> Result<User> {
        new_user.email = new_user.email.trim().to_lowercase();
        if new_user.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if !new_user.email.contains('@') {
            return Err(
                ValidationError::InvalidInput("Invalid email address".to_string()).into(),
            );
        }
        if self
            .user_repository
            .find_by_email(&new_user.email)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(
                "Email already registered. Please login instead.".to_string(),
            ));
        }

        let user = self.user_repository.insert(new_user).await?;
        info!("Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn update_name(&self, user_id: &str, name: String) -> Result<User> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        self.user_repository.update_name(user_id, name).await
    }

    async fn update_password_hash(&self, user_id: &str, password_hash: String) -> Result<()> {
        self.user_repository
            .update_password_hash(user_id, password_hash)
            .await
    }
}
