//! Unit tests for indicator snapshot assembly

use assayer::indicators::calculator::{compute_snapshot, MIN_CANDLES};
use assayer::models::candle::Candle;
use chrono::Utc;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, Utc::now()))
        .collect()
}

fn varied_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + ((i as f64) * 0.4).sin() * 3.0 + i as f64 * 0.05)
        .collect()
}

#[test]
fn test_short_series_yields_empty_snapshot() {
    let candles = candles_from_closes(&varied_closes(MIN_CANDLES - 1));
    let snapshot = compute_snapshot(&candles);
    assert!(snapshot.is_empty());
    assert!(snapshot.rsi.is_none());
    assert!(snapshot.bb_position.is_none());
}

#[test]
fn test_full_series_populates_every_reading() {
    let candles = candles_from_closes(&varied_closes(60));
    let snapshot = compute_snapshot(&candles);

    assert!(!snapshot.is_empty());
    assert!(snapshot.rsi.is_some());
    assert!(snapshot.sma_20.is_some());
    assert!(snapshot.sma_50.is_some());
    assert!(snapshot.macd.is_some());
    assert!(snapshot.macd_signal.is_some());
    assert!(snapshot.macd_hist.is_some());
    assert!(snapshot.bb_upper.is_some());
    assert!(snapshot.bb_middle.is_some());
    assert!(snapshot.bb_lower.is_some());
    assert!(snapshot.bb_position.is_some());
    // The calculator never injects the price; that is the caller's job.
    assert!(snapshot.current_price.is_none());
}

#[test]
fn test_rsi_stays_in_range() {
    let candles = candles_from_closes(&varied_closes(80));
    let snapshot = compute_snapshot(&candles);
    let rsi = snapshot.rsi.unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn test_bb_position_locates_last_close() {
    let candles = candles_from_closes(&varied_closes(60));
    let snapshot = compute_snapshot(&candles);

    let last_close = candles.last().unwrap().close;
    let upper = snapshot.bb_upper.unwrap();
    let lower = snapshot.bb_lower.unwrap();
    let position = snapshot.bb_position.unwrap();

    let expected = (last_close - lower) / (upper - lower);
    assert!((position - expected).abs() < 1e-10);
}

#[test]
fn test_flat_series_leaves_bb_position_absent() {
    // Zero band width has no inside/outside; the reading stays absent and
    // resolves to the neutral 0.5 in the fusion rules.
    let candles = candles_from_closes(&[100.0; 60]);
    let snapshot = compute_snapshot(&candles);
    assert!(snapshot.bb_upper.is_some());
    assert!(snapshot.bb_position.is_none());
}

#[test]
fn test_with_current_price_builder() {
    let candles = candles_from_closes(&varied_closes(60));
    let snapshot = compute_snapshot(&candles).with_current_price(123.45);
    assert_eq!(snapshot.current_price, Some(123.45));
}

#[test]
fn test_exact_minimum_length() {
    let candles = candles_from_closes(&varied_closes(MIN_CANDLES));
    let snapshot = compute_snapshot(&candles);
    assert!(!snapshot.is_empty());
    assert!(snapshot.sma_50.is_some());
}
