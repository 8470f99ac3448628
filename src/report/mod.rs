//! Human-readable report rendering for channel delivery.
//!
//! Pure string assembly: the renderer consumes the evaluation outputs as
//! data and knows nothing about how the text is transported.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{SignalOutput, Vote};
use crate::models::trend::TrendShape;
use crate::signals::rules::{NEUTRAL_BB_POSITION, NEUTRAL_RSI};
use chrono::{DateTime, Local};

/// One instrument's row in the daily summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub instrument: String,
    pub price: f64,
    pub change_pct: f64,
}

/// Render the full analysis message for one instrument.
pub fn render_analysis(
    instrument: &str,
    interval: &str,
    snapshot: &IndicatorSnapshot,
    trend: Option<&TrendShape>,
    signal: &SignalOutput,
    analyzed_at: &DateTime<Local>,
) -> String {
    let mut message = format!(
        "🔍 {} analysis ({} bars)\n\n",
        instrument.to_uppercase(),
        interval
    );

    if let Some(price) = snapshot.current_price {
        message.push_str(&format!("💰 Current price: ${:.2}\n", price));
    }
    message.push_str(&format!("📊 Market direction: {}\n", signal.direction));
    message.push_str(&format!("🎯 Suggested action: {}\n", signal.action));
    message.push_str(&format!("🛡️ Confidence: {}%\n\n", signal.confidence));

    message.push_str("📈 Indicator breakdown:\n");
    for vote in &signal.votes {
        let marker = if vote.vote.agrees_with(signal.action) {
            "✅"
        } else if vote.vote == Vote::Neutral {
            "➖"
        } else {
            "❌"
        };
        message.push_str(&format!("{} {}: {}\n", marker, vote.indicator, vote.vote));
    }

    message.push_str(&format!(
        "\n📊 RSI: {:.1}",
        snapshot.rsi.unwrap_or(NEUTRAL_RSI)
    ));
    message.push_str(&format!(
        "\n📊 Bollinger position: {:.1}%",
        snapshot.bb_position.unwrap_or(NEUTRAL_BB_POSITION) * 100.0
    ));
    message.push_str(&format!(
        "\n💪 Trend strength: {:.1}%",
        trend.map(|shape| shape.trend_strength).unwrap_or(0.0) * 100.0
    ));

    message.push_str(&format!(
        "\n\n⏰ Analyzed at: {}",
        analyzed_at.format("%H:%M")
    ));
    message.push_str("\n🔄 Next update in 4 hours");
    message.push_str(&format!("\n#{} #signal", instrument.to_lowercase()));

    message
}

/// Render the once-a-day price summary.
pub fn render_daily_summary(entries: &[SummaryEntry], rendered_at: &DateTime<Local>) -> String {
    let mut message = String::from("📊 Daily metals report 📊\n\n");
    message.push_str(&format!(
        "📅 Date: {}\n\n",
        rendered_at.format("%Y-%m-%d %H:%M")
    ));

    for entry in entries {
        let change_marker = if entry.change_pct > 0.0 { "📈" } else { "📉" };
        message.push_str(&format!("{}:\n", entry.instrument.to_uppercase()));
        message.push_str(&format!("💰 Current price: ${:.2}\n", entry.price));
        message.push_str(&format!(
            "{} 30-day change: {:+.2}%\n\n",
            change_marker, entry.change_pct
        ));
    }

    message.push_str("🔄 Next update in 4 hours\n");
    message.push_str("#daily_report #metals");

    message
}

/// Degraded message for a tick without enough market data.
pub fn render_insufficient_data(instrument: &str) -> String {
    format!(
        "⚠️ Not enough market data for {}, skipping this run",
        instrument.to_uppercase()
    )
}

/// Degraded message when an evaluation stage failed outright.
pub fn render_failure(instrument: &str) -> String {
    format!("⚠️ Analysis failed for {}", instrument.to_uppercase())
}
