//! Unit tests for the fusion engine

use assayer::models::indicators::IndicatorSnapshot;
use assayer::models::signal::{Action, MarketDirection, SignalOutput, Vote};
use assayer::models::trend::TrendShape;
use assayer::signals::engine::SignalEngine;

fn trend_with_strength(strength: f64) -> TrendShape {
    TrendShape {
        trend_strength: strength,
        ..Default::default()
    }
}

fn snapshot(
    rsi: f64,
    sma_20: f64,
    sma_50: f64,
    price: f64,
    macd_hist: f64,
    bb_position: f64,
) -> IndicatorSnapshot {
    IndicatorSnapshot {
        current_price: Some(price),
        rsi: Some(rsi),
        sma_20: Some(sma_20),
        sma_50: Some(sma_50),
        macd_hist: Some(macd_hist),
        bb_position: Some(bb_position),
        ..Default::default()
    }
}

#[test]
fn test_breakdown_keeps_rule_order() {
    let signal = SignalEngine::fuse(&IndicatorSnapshot::default(), None);
    let names: Vec<&str> = signal
        .votes
        .iter()
        .map(|vote| vote.indicator.as_str())
        .collect();
    assert_eq!(names, vec!["RSI", "MA", "MACD", "Bollinger", "Trend"]);
}

#[test]
fn test_empty_inputs_abstain() {
    let signal = SignalEngine::fuse(&IndicatorSnapshot::default(), None);
    assert_eq!(signal.direction, MarketDirection::Ranging);
    assert_eq!(signal.action, Action::Wait);
    assert_eq!(signal.confidence, 50);
    assert!(signal.votes.iter().all(|vote| vote.vote == Vote::Neutral));
}

#[test]
fn test_fusion_is_pure() {
    let snap = snapshot(25.0, 110.0, 100.0, 112.0, 1.5, 0.1);
    let trend = trend_with_strength(0.2);
    let first = SignalEngine::fuse(&snap, Some(&trend));
    let second = SignalEngine::fuse(&snap, Some(&trend));
    assert_eq!(first, second);
}

#[test]
fn test_confidence_ladder() {
    // 5 non-neutral votes.
    let snap = snapshot(25.0, 110.0, 100.0, 112.0, 1.5, 0.1);
    let trend = trend_with_strength(0.2);
    assert_eq!(SignalEngine::fuse(&snap, Some(&trend)).confidence, 80);

    // 4: the MA rule goes neutral.
    let snap = snapshot(25.0, 100.0, 100.0, 100.0, 1.5, 0.1);
    assert_eq!(SignalEngine::fuse(&snap, Some(&trend)).confidence, 70);

    // 3: Bollinger goes neutral too.
    let snap = snapshot(25.0, 100.0, 100.0, 100.0, 1.5, 0.5);
    assert_eq!(SignalEngine::fuse(&snap, Some(&trend)).confidence, 60);

    // 2: trend goes neutral.
    let snap = snapshot(25.0, 100.0, 100.0, 100.0, 1.5, 0.5);
    assert_eq!(SignalEngine::fuse(&snap, None).confidence, 50);

    // 1 and 0 also floor at 50.
    let snap = snapshot(25.0, 100.0, 100.0, 100.0, 0.0, 0.5);
    assert_eq!(SignalEngine::fuse(&snap, None).confidence, 50);
    let snap = snapshot(50.0, 100.0, 100.0, 100.0, 0.0, 0.5);
    assert_eq!(SignalEngine::fuse(&snap, None).confidence, 50);
}

#[test]
fn test_confidence_ignores_directional_agreement() {
    // 3 buy votes (RSI, MACD, Bollinger) against 2 sell votes (MA, Trend):
    // five confirmations still mean confidence 80, by design.
    let snap = snapshot(25.0, 90.0, 100.0, 85.0, 1.2, 0.1);
    let trend = trend_with_strength(-0.2);
    let signal = SignalEngine::fuse(&snap, Some(&trend));
    assert_eq!(signal.confidence, 80);
    assert_eq!(signal.direction, MarketDirection::Bullish);
    assert_eq!(signal.action, Action::Buy);
}

#[test]
fn test_three_sell_votes_read_bearish_at_60() {
    let snap = snapshot(75.0, 90.0, 100.0, 85.0, -1.5, 0.5);
    let signal = SignalEngine::fuse(&snap, None);
    assert_eq!(signal.confidence, 60);
    assert_eq!(signal.direction, MarketDirection::Bearish);
    assert_eq!(signal.action, Action::Sell);
}

#[test]
fn test_tied_votes_mean_ranging() {
    // 1 buy (MACD) vs 1 sell (Bollinger): a tie waits.
    let snap = snapshot(50.0, 100.0, 100.0, 100.0, 0.5, 0.9);
    let signal = SignalEngine::fuse(&snap, None);
    assert_eq!(signal.direction, MarketDirection::Ranging);
    assert_eq!(signal.action, Action::Wait);
    assert_eq!(signal.confidence, 50);
}

#[test]
fn test_unknown_sentinel_shape() {
    let sentinel = SignalOutput::unknown();
    assert_eq!(sentinel.direction, MarketDirection::Unknown);
    assert_eq!(sentinel.action, Action::Unknown);
    assert_eq!(sentinel.confidence, 0);
    assert!(sentinel.votes.is_empty());
}

#[test]
fn test_vote_agreement_helper() {
    assert!(Vote::Buy.agrees_with(Action::Buy));
    assert!(Vote::Sell.agrees_with(Action::Sell));
    assert!(!Vote::Buy.agrees_with(Action::Sell));
    assert!(!Vote::Neutral.agrees_with(Action::Wait));
    assert!(!Vote::Neutral.agrees_with(Action::Buy));
}
