//! Signup, login, current-user, and profile endpoints.

use std::sync::Arc;

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{
    LoginRequest, MessageResponse, PasswordChange, ProfileUpdate, SignupRequest, TokenResponse,
};
use nestegg_core::constants::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
use nestegg_core::users::{NewUser, User};

fn validate_password(password: &str) -> Result<(), ApiError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ApiError::bad_request(format!(
            "Password must be {}-{} characters",
            PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
        )));
    }
    Ok(())
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate_password(&payload.password)?;
    let password_hash = state.auth.hash_password(&payload.password)?;
    let user = state
        .user_service
        .register(NewUser {
            name: payload.name,
            email: payload.email,
            password_hash,
            risk_profile: payload.risk_profile,
            kyc_status: payload.kyc_status,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let Some((user, stored_hash)) = state.user_service.credentials_by_email(&payload.email)?
    else {
        return Err(ApiError::unauthorized(
            "Email not found. Please check or sign up.",
        ));
    };

    if !state.auth.verify_password(&stored_hash, &payload.password) {
        return Err(ApiError::unauthorized(
            "Incorrect password. Please try again.",
        ));
    }

    let access_token = state.auth.issue_token(&user)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

async fn me(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&auth_user.id)?;
    Ok(Json(user))
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&auth_user.id)?;
    Ok(Json(user))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<ProfileUpdate>,
) -> ApiResult<Json<User>> {
    let user = state
        .user_service
        .update_name(&auth_user.id, payload.name)
        .await?;
    Ok(Json(user))
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<PasswordChange>,
) -> ApiResult<Json<MessageResponse>> {
    let stored_hash = state.user_service.password_hash(&auth_user.id)?;
    if !state
        .auth
        .verify_password(&stored_hash, &payload.current_password)
    {
        return Err(ApiError::bad_request("Current password is incorrect"));
    }

    validate_password(&payload.new_password)?;
    let new_hash = state.auth.hash_password(&payload.new_password)?;
    state
        .user_service
        .update_password_hash(&auth_user.id, new_hash)
        .await?;
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// Public endpoints: no bearer token required.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// `/auth/me`, mounted behind the auth middleware.
pub fn me_router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}

/// Profile endpoints, mounted behind the auth middleware.
pub fn profile_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/password", put(change_password))
}
