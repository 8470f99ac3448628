//! Unit tests for report rendering

use assayer::models::indicators::IndicatorSnapshot;
use assayer::models::trend::TrendShape;
use assayer::report::{
    render_analysis, render_daily_summary, render_failure, render_insufficient_data, SummaryEntry,
};
use assayer::signals::engine::SignalEngine;
use chrono::{Local, TimeZone};

fn bullish_snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot {
        current_price: Some(2451.2),
        rsi: Some(27.4),
        sma_20: Some(2440.0),
        sma_50: Some(2420.0),
        macd_hist: Some(1.5),
        bb_position: Some(0.125),
        ..Default::default()
    }
}

#[test]
fn test_analysis_report_carries_the_call() {
    let snapshot = bullish_snapshot();
    let trend = TrendShape {
        higher_highs: 10,
        lower_highs: 3,
        higher_lows: 9,
        lower_lows: 2,
        trend_strength: 14.0 / 30.0,
    };
    let signal = SignalEngine::fuse(&snapshot, Some(&trend));
    let at = Local.with_ymd_and_hms(2024, 8, 7, 13, 0, 0).unwrap();

    let message = render_analysis("gold", "15m", &snapshot, Some(&trend), &signal, &at);

    assert!(message.contains("GOLD analysis (15m bars)"));
    assert!(message.contains("Current price: $2451.20"));
    assert!(message.contains("Market direction: Bullish"));
    assert!(message.contains("Suggested action: Buy"));
    assert!(message.contains("Confidence: 80%"));
    assert!(message.contains("✅ RSI: Buy"));
    assert!(message.contains("✅ MA: Buy"));
    assert!(message.contains("✅ MACD: Buy"));
    assert!(message.contains("✅ Bollinger: Buy"));
    assert!(message.contains("✅ Trend: Buy"));
    assert!(message.contains("RSI: 27.4"));
    assert!(message.contains("Bollinger position: 12.5%"));
    assert!(message.contains("Trend strength: 46.7%"));
    assert!(message.contains("Analyzed at: 13:00"));
    assert!(message.contains("#gold #signal"));
}

#[test]
fn test_analysis_report_marks_disagreement_and_neutral() {
    // RSI overbought against an otherwise bullish read.
    let mut snapshot = bullish_snapshot();
    snapshot.rsi = Some(75.0);
    snapshot.bb_position = Some(0.5);
    let signal = SignalEngine::fuse(&snapshot, None);
    let at = Local.with_ymd_and_hms(2024, 8, 7, 13, 0, 0).unwrap();

    let message = render_analysis("silver", "15m", &snapshot, None, &signal, &at);

    assert!(message.contains("❌ RSI: Sell"));
    assert!(message.contains("✅ MA: Buy"));
    assert!(message.contains("➖ Bollinger: Neutral"));
    assert!(message.contains("➖ Trend: Neutral"));
    assert!(message.contains("#silver #signal"));
}

#[test]
fn test_analysis_report_defaults_for_missing_readings() {
    let snapshot = IndicatorSnapshot::default().with_current_price(100.0);
    let signal = SignalEngine::fuse(&snapshot, None);
    let at = Local.with_ymd_and_hms(2024, 8, 7, 9, 0, 0).unwrap();

    let message = render_analysis("gold", "15m", &snapshot, None, &signal, &at);

    assert!(message.contains("RSI: 50.0"));
    assert!(message.contains("Bollinger position: 50.0%"));
    assert!(message.contains("Trend strength: 0.0%"));
    assert!(message.contains("Market direction: Ranging"));
    assert!(message.contains("Suggested action: Wait"));
}

#[test]
fn test_daily_summary_formats_changes() {
    let entries = vec![
        SummaryEntry {
            instrument: "gold".to_string(),
            price: 2451.2,
            change_pct: 3.25,
        },
        SummaryEntry {
            instrument: "silver".to_string(),
            price: 29.87,
            change_pct: -1.4,
        },
    ];
    let at = Local.with_ymd_and_hms(2024, 8, 7, 4, 30, 0).unwrap();

    let message = render_daily_summary(&entries, &at);

    assert!(message.contains("Daily metals report"));
    assert!(message.contains("Date: 2024-08-07 04:30"));
    assert!(message.contains("GOLD:"));
    assert!(message.contains("📈 30-day change: +3.25%"));
    assert!(message.contains("SILVER:"));
    assert!(message.contains("📉 30-day change: -1.40%"));
    assert!(message.contains("#daily_report #metals"));
}

#[test]
fn test_degraded_messages_name_the_instrument() {
    assert!(render_insufficient_data("gold").contains("GOLD"));
    assert!(render_failure("silver").contains("SILVER"));
}
