use std::sync::Arc;

use axum::extract::{Extension, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use nestegg_core::risk::{RiskAssessment, RiskAssessmentResult, RiskQuestion};

async fn get_questions(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RiskQuestion>>> {
    let questions = state.risk_service.get_questions()?;
    Ok(Json(questions))
}

async fn submit_assessment(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(assessment): Json<RiskAssessment>,
) -> ApiResult<Json<RiskAssessmentResult>> {
    let result = state
        .risk_service
        .submit_assessment(&auth_user.id, assessment)
        .await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/risk/questions", get(get_questions))
        .route("/risk/assessment", post(submit_assessment))
}
