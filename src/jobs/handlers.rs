//! Job handlers for the scheduled analysis workflow
//!
//! Each cron tick runs one pass: fetch bars per instrument, compute the
//! indicator snapshot and trend shape, fuse a signal, render the report,
//! and hand it to the notifier. Failures degrade per instrument; a tick
//! never aborts the worker.

use crate::core::schedule;
use crate::indicators::calculator::{compute_snapshot, MIN_CANDLES};
use crate::indicators::structure::analyze_trend_shape;
use crate::jobs::context::JobContext;
use crate::jobs::types::{AnalysisJob, DailySummaryJob};
use crate::report::{self, SummaryEntry};
use crate::signals::engine::SignalEngine;
use apalis::prelude::*;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Handler for the full analysis tick
pub async fn handle_analysis(
    job: AnalysisJob,
    ctx: Data<Arc<JobContext>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    run_analysis_pass(&ctx, job.scheduled_at).await
}

/// Handler for the daily summary tick
pub async fn handle_daily_summary(
    job: DailySummaryJob,
    ctx: Data<Arc<JobContext>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    run_daily_summary(&ctx, job.scheduled_at).await
}

/// One full analysis pass over every configured instrument.
pub async fn run_analysis_pass(
    ctx: &JobContext,
    now: DateTime<Local>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if !schedule::should_run_analysis(&now) {
        info!(at = %now, "market closed, skipping analysis pass");
        return Ok(());
    }

    info!(
        instrument_count = ctx.config.instruments.len(),
        "starting analysis pass for {} instruments",
        ctx.config.instruments.len()
    );

    for (i, (name, symbol)) in ctx.config.instruments.iter().enumerate() {
        // Spacing between channel posts happens here, at the delivery
        // boundary; the evaluation itself is free of timing concerns.
        if i > 0 {
            tokio::time::sleep(Duration::from_secs(ctx.config.message_gap_secs)).await;
        }

        let message = match evaluate_instrument(ctx, name, symbol, &now).await {
            Ok(message) => message,
            Err(e) => {
                error!(instrument = %name, error = %e, "analysis failed for {}", name);
                report::render_failure(name)
            }
        };

        if let Err(e) = ctx.notifier.send(&message).await {
            error!(instrument = %name, error = %e, "failed to deliver analysis for {}", name);
        }
    }

    info!("analysis pass finished");
    Ok(())
}

/// Evaluate one instrument and render its report.
async fn evaluate_instrument(
    ctx: &JobContext,
    name: &str,
    symbol: &str,
    now: &DateTime<Local>,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let candles = ctx
        .provider
        .fetch_series(symbol, &ctx.config.lookback_range, &ctx.config.bar_interval)
        .await?;

    if candles.len() < MIN_CANDLES {
        warn!(
            instrument = %name,
            count = candles.len(),
            min = MIN_CANDLES,
            "not enough candles ({} < {}) for {}",
            candles.len(),
            MIN_CANDLES,
            name
        );
        return Ok(report::render_insufficient_data(name));
    }

    let last_close = match candles.last() {
        Some(candle) => candle.close,
        None => return Ok(report::render_insufficient_data(name)),
    };

    let snapshot = compute_snapshot(&candles).with_current_price(last_close);
    if snapshot.is_empty() {
        warn!(instrument = %name, "indicator snapshot came back empty for {}", name);
        return Ok(report::render_insufficient_data(name));
    }

    let trend = analyze_trend_shape(&candles);
    let signal = SignalEngine::fuse(&snapshot, trend.as_ref());

    debug!(
        instrument = %name,
        direction = %signal.direction,
        action = %signal.action,
        confidence = signal.confidence,
        "evaluated {}: {} / {} at {}%",
        name,
        signal.direction,
        signal.action,
        signal.confidence
    );

    Ok(report::render_analysis(
        name,
        &ctx.config.bar_interval,
        &snapshot,
        trend.as_ref(),
        &signal,
        now,
    ))
}

/// Build and deliver the daily price summary.
pub async fn run_daily_summary(
    ctx: &JobContext,
    now: DateTime<Local>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if !schedule::should_run_summary(&now) {
        info!(at = %now, "market closed, skipping daily summary");
        return Ok(());
    }

    let mut entries = Vec::with_capacity(ctx.config.instruments.len());

    for (name, symbol) in &ctx.config.instruments {
        let candles = match ctx
            .provider
            .fetch_series(symbol, &ctx.config.summary_range, &ctx.config.bar_interval)
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                error!(instrument = %name, error = %e, "summary fetch failed for {}", name);
                continue;
            }
        };

        let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
            warn!(instrument = %name, "no summary data for {}", name);
            continue;
        };

        entries.push(SummaryEntry {
            instrument: name.clone(),
            price: last.close,
            change_pct: (last.close - first.close) / first.close * 100.0,
        });
    }

    let message = report::render_daily_summary(&entries, &now);
    if let Err(e) = ctx.notifier.send(&message).await {
        error!(error = %e, "failed to deliver daily summary");
    }

    Ok(())
}
