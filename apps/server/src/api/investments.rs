use std::sync::Arc;

use axum::extract::{Extension, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::scheduler::SchedulerState;
use nestegg_core::investments::{Investment, NewInvestment, PortfolioSummary};
use nestegg_core::quotes::{PriceQuote, PriceRefreshOutcome};

async fn get_investments(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state.investment_service.get_investments(&auth_user.id)?;
    Ok(Json(investments))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state
        .investment_service
        .get_portfolio_summary(&auth_user.id)?;
    Ok(Json(summary))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(investment): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let created = state
        .investment_service
        .create_investment(&auth_user.id, investment)
        .await?;
    Ok(Json(created))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(investment): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let updated = state
        .investment_service
        .update_investment(&auth_user.id, &id, investment)
        .await?;
    Ok(Json(updated))
}

async fn get_price(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceQuote>> {
    let quote = state.quote_service.get_price(&symbol).await?;
    Ok(Json(quote))
}

async fn refresh_prices(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceRefreshOutcome>> {
    let outcome = state.quote_service.refresh_all_prices().await?;
    Ok(Json(outcome))
}

async fn scheduler_status(State(state): State<Arc<AppState>>) -> Json<SchedulerState> {
    let status = state.scheduler_status.read().unwrap().clone();
    Json(status)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(get_investments).post(create_investment))
        .route("/investments/summary", get(get_summary))
        .route("/investments/{id}", axum::routing::put(update_investment))
        .route("/investments/price/{symbol}", get(get_price))
        .route("/investments/refresh-prices", post(refresh_prices))
        .route("/investments/scheduler/status", get(scheduler_status))
}
