use std::sync::Arc;

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use nestegg_core::transactions::{NewTransaction, Transaction, TransactionSummary};

async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.get_transactions(&auth_user.id)?;
    Ok(Json(transactions))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<TransactionSummary>> {
    let summary = state.transaction_service.get_summary(&auth_user.id)?;
    Ok(Json(summary))
}

/// Records the event and reconciles the matching position in one atomic
/// operation. Business-rule violations (oversell, bad quantity/price) come
/// back as 400s with nothing persisted.
async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(transaction): Json<NewTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let recorded = state
        .transaction_service
        .record_transaction(&auth_user.id, transaction)
        .await?;
    Ok((StatusCode::CREATED, Json(recorded)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route("/transactions/summary", get(get_summary))
}
