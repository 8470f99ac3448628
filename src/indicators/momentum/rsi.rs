//! RSI (Relative Strength Index) indicator

use crate::models::candle::Candle;
use crate::models::indicators::RsiIndicator;

/// Calculate RSI with Wilder smoothing
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let len = period as usize;
    if len == 0 || candles.len() < len + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(candles.len() - 1);
    let mut losses = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    // Wilder smoothing: seed with the simple average of the first `period`
    // moves, then blend each later move in at 1/period weight.
    let mut avg_gain = gains[..len].iter().sum::<f64>() / len as f64;
    let mut avg_loss = losses[..len].iter().sum::<f64>() / len as f64;

    for i in len..gains.len() {
        avg_gain = (avg_gain * (len as f64 - 1.0) + gains[i]) / len as f64;
        avg_loss = (avg_loss * (len as f64 - 1.0) + losses[i]) / len as f64;
    }

    if avg_loss == 0.0 {
        return Some(RsiIndicator {
            value: 100.0,
            period: Some(period),
        });
    }

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    Some(RsiIndicator {
        value: rsi,
        period: Some(period),
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, 14)
}
