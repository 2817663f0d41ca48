use std::sync::Arc;

use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use nestegg_core::simulations::{NewSimulation, Simulation};

async fn get_simulations(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Simulation>>> {
    let simulations = state.simulation_service.get_simulations(&auth_user.id)?;
    Ok(Json(simulations))
}

async fn create_simulation(
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(simulation): Json<NewSimulation>,
) -> ApiResult<(StatusCode, Json<Simulation>)> {
    let saved = state
        .simulation_service
        .run_simulation(&auth_user.id, simulation)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn delete_simulation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    let deleted = state
        .simulation_service
        .delete_simulation(&auth_user.id, &id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Simulation not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/simulations",
            get(get_simulations).post(create_simulation),
        )
        .route("/simulations/{id}", axum::routing::delete(delete_simulation))
}
