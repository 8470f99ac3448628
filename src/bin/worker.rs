//! Assayer Worker
//!
//! Runs the scheduled metals analysis: a cron worker for the four-hourly
//! signal reports and one for the daily price summary.

use apalis::prelude::*;
use apalis_cron::CronStream;
use assayer::config::{self, Config};
use assayer::core::schedule;
use assayer::jobs::context::JobContext;
use assayer::jobs::handlers;
use assayer::logging;
use assayer::services::market_data::MarketDataProvider;
use assayer::services::notifier::Notifier;
use assayer::services::telegram::TelegramNotifier;
use assayer::services::yahoo::YahooFinanceProvider;
use chrono::Local;
use cron::Schedule;
use dotenvy::dotenv;
use std::str::FromStr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = config::get_environment();
    info!("Starting Assayer Worker");
    info!(environment = %env, "Environment");

    let config = Arc::new(Config::from_env()?);
    let instrument_names: Vec<&str> = config
        .instruments
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    info!(
        instruments = ?instrument_names,
        interval = %config.bar_interval,
        "Tracking instruments: {}",
        instrument_names.join(", ")
    );

    let provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooFinanceProvider::new());
    let notifier: Arc<dyn Notifier + Send + Sync> = Arc::new(TelegramNotifier::new(
        config.bot_token.clone(),
        config.chat_id.clone(),
    ));
    let ctx = Arc::new(JobContext::new(provider, notifier, config.clone()));

    let analysis_schedule = Schedule::from_str(schedule::ANALYSIS_CRON)?;
    let summary_schedule = Schedule::from_str(schedule::DAILY_SUMMARY_CRON)?;
    info!(
        analysis_cron = schedule::ANALYSIS_CRON,
        summary_cron = schedule::DAILY_SUMMARY_CRON,
        "Schedules loaded"
    );

    let analysis_ctx = ctx.clone();
    let analysis_handle = tokio::spawn(async move {
        let worker = WorkerBuilder::new("analysis-worker")
            .data(analysis_ctx)
            .backend(CronStream::new_with_timezone(analysis_schedule, Local))
            .build_fn(handlers::handle_analysis);

        info!("Analysis worker started");
        worker.run().await;
    });

    let summary_ctx = ctx.clone();
    let summary_handle = tokio::spawn(async move {
        let worker = WorkerBuilder::new("daily-summary-worker")
            .data(summary_ctx)
            .backend(CronStream::new_with_timezone(summary_schedule, Local))
            .build_fn(handlers::handle_daily_summary);

        info!("Daily summary worker started");
        worker.run().await;
    });

    info!("Worker started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down worker...");
            analysis_handle.abort();
            summary_handle.abort();
            info!("Worker stopped");
        }
    }

    Ok(())
}
