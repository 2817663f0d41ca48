use std::sync::{Arc, RwLock};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use crate::scheduler::{SchedulerState, SchedulerStatusHandle};
use nestegg_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    investments::{InvestmentService, InvestmentServiceTrait},
    quotes::{QuoteService, QuoteServiceTrait},
    recommendations::{RecommendationService, RecommendationServiceTrait},
    risk::{RiskService, RiskServiceTrait},
    simulations::{SimulationService, SimulationServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use nestegg_market_data::{QuoteCache, YahooProvider};
use nestegg_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    investments::InvestmentRepository,
    portfolio_history::PortfolioHistoryRepository,
    risk::RiskQuestionRepository,
    simulations::SimulationRepository,
    transactions::TransactionRepository,
    users::UserRepository,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub risk_service: Arc<dyn RiskServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub simulation_service: Arc<dyn SimulationServiceTrait>,
    pub recommendation_service: Arc<dyn RecommendationServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub auth: AuthManager,
    pub scheduler_status: SchedulerStatusHandle,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("NESTEGG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer(pool.clone());

    // Repositories
    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let risk_question_repository = Arc::new(RiskQuestionRepository::new(pool.clone()));
    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));
    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let simulation_repository = Arc::new(SimulationRepository::new(pool.clone(), writer.clone()));
    let history_repository = Arc::new(PortfolioHistoryRepository::new(
        pool.clone(),
        writer.clone(),
    ));

    // Market data: one provider instance and one cache, injected rather
    // than reached for as globals.
    let market_provider = Arc::new(
        YahooProvider::new().map_err(|e| anyhow::anyhow!("market data provider: {}", e))?,
    );
    let quote_cache = Arc::new(QuoteCache::new());

    // Services
    let user_service: Arc<dyn UserServiceTrait> =
        Arc::new(UserService::new(user_repository.clone()));
    let risk_service: Arc<dyn RiskServiceTrait> = Arc::new(RiskService::new(
        risk_question_repository,
        user_repository.clone(),
    ));
    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(goal_repository));
    let investment_service: Arc<dyn InvestmentServiceTrait> =
        Arc::new(InvestmentService::new(investment_repository.clone()));
    let transaction_service: Arc<dyn TransactionServiceTrait> = Arc::new(
        TransactionService::new(transaction_repository, investment_repository.clone()),
    );
    let simulation_service: Arc<dyn SimulationServiceTrait> =
        Arc::new(SimulationService::new(simulation_repository));
    let recommendation_service: Arc<dyn RecommendationServiceTrait> = Arc::new(
        RecommendationService::new(user_repository, investment_repository.clone()),
    );
    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        investment_repository.clone(),
        history_repository.clone(),
        goal_service.clone(),
    ));
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(
        investment_repository,
        history_repository,
        market_provider,
        quote_cache,
    ));

    let auth = AuthManager::new(&config.secret_key, config.token_ttl_minutes);
    let scheduler_status: SchedulerStatusHandle = Arc::new(RwLock::new(SchedulerState::default()));

    Ok(Arc::new(AppState {
        user_service,
        risk_service,
        goal_service,
        investment_service,
        transaction_service,
        simulation_service,
        recommendation_service,
        dashboard_service,
        quote_service,
        auth,
        scheduler_status,
        db_path,
    }))
}
