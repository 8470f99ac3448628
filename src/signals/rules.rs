//! Per-indicator classification rules and the shared default policy.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::Vote;
use crate::models::trend::TrendShape;

/// Neutral fallback when RSI is unavailable.
pub const NEUTRAL_RSI: f64 = 50.0;
/// Neutral fallback when the Bollinger position is unavailable (flat or
/// missing bands).
pub const NEUTRAL_BB_POSITION: f64 = 0.5;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const BB_BUY_ZONE: f64 = 0.2;
pub const BB_SELL_ZONE: f64 = 0.8;
pub const TREND_THRESHOLD: f64 = 0.1;

/// Inputs for the five classifiers, with every absence already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInput {
    pub current_price: f64,
    pub rsi: f64,
    pub sma_20: f64,
    pub sma_50: f64,
    pub macd_hist: f64,
    pub bb_position: f64,
    pub trend_strength: f64,
}

impl RuleInput {
    /// Resolve optional readings into concrete rule inputs.
    ///
    /// Every default lands in the neutral branch of its rule, so missing
    /// data never manufactures a directional vote on its own. The one
    /// deliberate pass-through: a missing `sma_50` resolves to 0, which a
    /// real positive `sma_20` trivially exceeds in the MA rule.
    pub fn resolve(snapshot: &IndicatorSnapshot, trend: Option<&TrendShape>) -> Self {
        Self {
            current_price: snapshot.current_price.unwrap_or(0.0),
            rsi: snapshot.rsi.unwrap_or(NEUTRAL_RSI),
            sma_20: snapshot.sma_20.unwrap_or(0.0),
            sma_50: snapshot.sma_50.unwrap_or(0.0),
            macd_hist: snapshot.macd_hist.unwrap_or(0.0),
            bb_position: snapshot.bb_position.unwrap_or(NEUTRAL_BB_POSITION),
            trend_strength: trend.map(|shape| shape.trend_strength).unwrap_or(0.0),
        }
    }
}

pub type Rule = fn(&RuleInput) -> Vote;

/// The five classifiers in evaluation (and display) order. Keeping them in
/// one table means confidence can be derived by a single aggregation pass.
pub const RULES: [(&str, Rule); 5] = [
    ("RSI", rsi_rule),
    ("MA", moving_average_rule),
    ("MACD", macd_rule),
    ("Bollinger", bollinger_rule),
    ("Trend", trend_rule),
];

fn rsi_rule(input: &RuleInput) -> Vote {
    if input.rsi < RSI_OVERSOLD {
        Vote::Buy
    } else if input.rsi > RSI_OVERBOUGHT {
        Vote::Sell
    } else {
        Vote::Neutral
    }
}

fn moving_average_rule(input: &RuleInput) -> Vote {
    if input.sma_20 > input.sma_50 && input.current_price > input.sma_20 {
        Vote::Buy
    } else if input.sma_20 < input.sma_50 && input.current_price < input.sma_20 {
        Vote::Sell
    } else {
        Vote::Neutral
    }
}

fn macd_rule(input: &RuleInput) -> Vote {
    if input.macd_hist > 0.0 {
        Vote::Buy
    } else if input.macd_hist < 0.0 {
        Vote::Sell
    } else {
        Vote::Neutral
    }
}

fn bollinger_rule(input: &RuleInput) -> Vote {
    if input.bb_position < BB_BUY_ZONE {
        Vote::Buy
    } else if input.bb_position > BB_SELL_ZONE {
        Vote::Sell
    } else {
        Vote::Neutral
    }
}

fn trend_rule(input: &RuleInput) -> Vote {
    if input.trend_strength > TREND_THRESHOLD {
        Vote::Buy
    } else if input.trend_strength < -TREND_THRESHOLD {
        Vote::Sell
    } else {
        Vote::Neutral
    }
}
