//! API surface: one router module per domain, composed under `/api/v1`.

mod auth;
mod dashboard;
mod goals;
mod health;
mod investments;
mod recommendations;
mod risk;
mod simulations;
mod transactions;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{middleware, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::config::Config;
use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any);

    // Everything except health and the login/signup pair requires a bearer
    // token.
    let protected = Router::new()
        .merge(auth::me_router())
        .merge(auth::profile_router())
        .merge(risk::router())
        .merge(goals::router())
        .merge(investments::router())
        .merge(transactions::router())
        .merge(simulations::router())
        .merge(dashboard::router())
        .merge(recommendations::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
