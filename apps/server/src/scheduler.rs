//! Background scheduler for the periodic price refresh.
//!
//! Runs a fixed interval (24h by default) mark-to-market pass over all
//! investments, with an initial delay so the server finishes starting first.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::config::Config;
use crate::main_lib::AppState;
use nestegg_core::quotes::PriceRefreshOutcome;

/// Observable scheduler state, surfaced by the status endpoint.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerState {
    pub running: bool,
    pub interval_hours: u64,
    pub last_run_at: Option<DateTime<Utc>>,
    pub next_run_at: Option<DateTime<Utc>>,
    pub last_outcome: Option<PriceRefreshOutcome>,
}

pub type SchedulerStatusHandle = Arc<RwLock<SchedulerState>>;

/// Starts the background price refresh scheduler.
pub fn start_price_refresh_scheduler(state: Arc<AppState>, config: &Config) {
    let interval_hours = config.price_refresh_hours;
    let initial_delay = Duration::from_secs(config.price_refresh_delay_secs);
    let period = Duration::from_secs(interval_hours * 60 * 60);

    {
        let mut status = state.scheduler_status.write().unwrap();
        status.running = true;
        status.interval_hours = interval_hours;
        status.next_run_at =
            Some(Utc::now() + chrono::Duration::from_std(initial_delay).unwrap_or_default());
    }

    tokio::spawn(async move {
        info!(
            "Price refresh scheduler started ({}h interval)",
            interval_hours
        );
        tokio::time::sleep(initial_delay).await;

        // First tick fires immediately after the initial delay.
        let mut ticker = interval(period);
        loop {
            ticker.tick().await;
            run_scheduled_refresh(&state, period).await;
        }
    });
}

async fn run_scheduled_refresh(state: &Arc<AppState>, period: Duration) {
    info!("Running scheduled price refresh...");
    let outcome = state.quote_service.refresh_all_prices().await;

    let mut status = state.scheduler_status.write().unwrap();
    status.last_run_at = Some(Utc::now());
    status.next_run_at =
        Some(Utc::now() + chrono::Duration::from_std(period).unwrap_or_default());
    match outcome {
        Ok(result) => {
            info!(
                "Scheduled price refresh completed: {} updated, {} failed",
                result.updated, result.failed
            );
            status.last_outcome = Some(result);
        }
        Err(e) => {
            warn!("Scheduled price refresh failed: {}", e);
            status.last_outcome = None;
        }
    }
}
