use std::sync::Arc;

use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use nestegg_core::goals::{Goal, NewGoal};

async fn get_goals(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals(&auth_user.id)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.create_goal(&auth_user.id, goal).await?;
    Ok(Json(g))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let g = state
        .goal_service
        .update_goal(&auth_user.id, &id, goal)
        .await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    let deleted = state.goal_service.delete_goal(&auth_user.id, &id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Goal not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{id}", axum::routing::put(update_goal).delete(delete_goal))
}
