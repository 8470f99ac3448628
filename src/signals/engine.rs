//! Rule-based fusion of indicator readings into a directional call.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Action, IndicatorVote, MarketDirection, SignalOutput, Vote};
use crate::models::trend::TrendShape;
use crate::signals::rules::{RuleInput, RULES};

pub struct SignalEngine;

impl SignalEngine {
    /// Fuse the snapshot and trend shape into a signal.
    ///
    /// Pure and stateless: identical inputs always produce an identical
    /// output. Missing readings vote neutral via the defaults resolved in
    /// [`RuleInput::resolve`].
    pub fn fuse(snapshot: &IndicatorSnapshot, trend: Option<&TrendShape>) -> SignalOutput {
        let input = RuleInput::resolve(snapshot, trend);

        let votes: Vec<IndicatorVote> = RULES
            .iter()
            .map(|(name, rule)| IndicatorVote {
                indicator: (*name).to_string(),
                vote: rule(&input),
            })
            .collect();

        let confirmations = votes.iter().filter(|v| v.vote != Vote::Neutral).count();
        let confidence = confidence_for(confirmations);

        let buy_votes = votes.iter().filter(|v| v.vote == Vote::Buy).count();
        let sell_votes = votes.iter().filter(|v| v.vote == Vote::Sell).count();

        let (direction, action) = if buy_votes > sell_votes {
            (MarketDirection::Bullish, Action::Buy)
        } else if sell_votes > buy_votes {
            (MarketDirection::Bearish, Action::Sell)
        } else {
            (MarketDirection::Ranging, Action::Wait)
        };

        SignalOutput {
            direction,
            action,
            confidence,
            votes,
        }
    }
}

/// Confidence reflects how many classifiers produced a non-neutral vote,
/// not whether those votes agree on a direction. A 3-buy/2-sell split still
/// counts five confirmations. Kept as-is for compatibility with the
/// established report semantics.
fn confidence_for(confirmations: usize) -> u8 {
    match confirmations {
        5 => 80,
        4 => 70,
        3 => 60,
        _ => 50,
    }
}
