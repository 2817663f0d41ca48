//! Per-user authentication: argon2 password hashing and JWT bearer tokens.

use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::main_lib::AppState;
use nestegg_core::users::User;

/// JWT claims. `sub` carries the user id; email and name ride along so
/// request handling rarely needs a user lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: i64,
}

/// The authenticated caller, injected as a request extension by the auth
/// middleware.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Issues and validates credentials. Constructed once by the composition
/// root and shared through `AppState`.
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl AuthManager {
    pub fn new(secret: &[u8], token_ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_ttl: Duration::minutes(token_ttl_minutes),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| {
                tracing::error!("Password hashing failed: {}", e);
                ApiError::internal()
            })
    }

    pub fn verify_password(&self, stored_hash: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            tracing::error!("Stored password hash is malformed");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn issue_token(&self, user: &User) -> Result<String, ApiError> {
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Token encoding failed: {}", e);
            ApiError::internal()
        })
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::unauthorized("Session expired. Please log in again."))
    }
}

/// Middleware guarding the protected API surface. Turns a valid
/// `Authorization: Bearer` header into an [`AuthUser`] extension.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("Could not validate credentials"))?;

    let claims = state.auth.decode_token(token)?;
    request.extensions_mut().insert(AuthUser {
        id: claims.sub,
        email: claims.email,
        name: claims.name,
    });
    Ok(next.run(request).await)
}
