use serde::{Deserialize, Serialize};
use std::fmt;

/// One classifier's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Buy,
    Sell,
    Neutral,
}

impl Vote {
    /// Whether this vote points the same way as the chosen action.
    pub fn agrees_with(&self, action: Action) -> bool {
        matches!(
            (self, action),
            (Vote::Buy, Action::Buy) | (Vote::Sell, Action::Sell)
        )
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Vote::Buy => "Buy",
            Vote::Sell => "Sell",
            Vote::Neutral => "Neutral",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDirection {
    Bullish,
    Bearish,
    Ranging,
    /// Sentinel for a failed evaluation; never produced by the rules.
    Unknown,
}

impl fmt::Display for MarketDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarketDirection::Bullish => "Bullish",
            MarketDirection::Bearish => "Bearish",
            MarketDirection::Ranging => "Ranging",
            MarketDirection::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Wait,
    /// Sentinel counterpart of `MarketDirection::Unknown`.
    Unknown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Buy => "Buy",
            Action::Sell => "Sell",
            Action::Wait => "Wait",
            Action::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// One row of the per-indicator breakdown, kept in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorVote {
    pub indicator: String,
    pub vote: Vote,
}

/// The fused directional call for one instrument at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub direction: MarketDirection,
    pub action: Action,
    /// One of 0 (sentinel), 50, 60, 70, 80.
    pub confidence: u8,
    pub votes: Vec<IndicatorVote>,
}

impl SignalOutput {
    /// Degraded output reported when an evaluation stage failed; carries no
    /// directional information and an empty breakdown.
    pub fn unknown() -> Self {
        Self {
            direction: MarketDirection::Unknown,
            action: Action::Unknown,
            confidence: 0,
            votes: Vec::new(),
        }
    }
}
