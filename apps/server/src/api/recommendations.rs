use std::sync::Arc;

use axum::extract::{Extension, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use nestegg_core::recommendations::Recommendations;

async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Recommendations>> {
    let recommendations = state
        .recommendation_service
        .get_recommendations(&auth_user.id)?;
    Ok(Json(recommendations))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/recommendations", get(get_recommendations))
}
