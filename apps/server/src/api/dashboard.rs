use std::sync::Arc;

use axum::extract::{Extension, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::HistoryQuery;
use nestegg_core::dashboard::{
    AllocationSlice, DashboardSummary, HistoryPeriod, PortfolioHistoryPoint,
};
use nestegg_core::goals::GoalProgress;

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.dashboard_service.get_summary(&auth_user.id)?;
    Ok(Json(summary))
}

async fn get_allocation(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<AllocationSlice>>> {
    let allocation = state.dashboard_service.get_allocation(&auth_user.id)?;
    Ok(Json(allocation))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<PortfolioHistoryPoint>>> {
    let period = HistoryPeriod::parse(query.period.as_deref().unwrap_or("1M"));
    let history = state.dashboard_service.get_history(&auth_user.id, period)?;
    Ok(Json(history))
}

async fn get_goals_progress(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<GoalProgress>>> {
    let progress = state.dashboard_service.get_goals_progress(&auth_user.id)?;
    Ok(Json(progress))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/summary", get(get_summary))
        .route("/dashboard/allocation", get(get_allocation))
        .route("/dashboard/history", get(get_history))
        .route("/dashboard/goals-progress", get(get_goals_progress))
}
