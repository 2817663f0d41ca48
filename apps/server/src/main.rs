use nestegg_server::api::app_router;
use nestegg_server::config::Config;
use nestegg_server::{build_state, init_tracing, scheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config).await?;

    // Start the background price refresh scheduler
    scheduler::start_price_refresh_scheduler(state.clone(), &config);

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
