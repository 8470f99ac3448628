//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if fast_period >= slow_period {
        return None;
    }
    if candles.len() < (slow_period + signal_period) as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_series = math::ema_series(&closes, fast_period as usize)?;
    let slow_series = math::ema_series(&closes, slow_period as usize)?;

    // The slow series starts (slow - fast) entries later; align before
    // differencing so both EMAs refer to the same bar.
    let offset = (slow_period - fast_period) as usize;
    let macd_series: Vec<f64> = fast_series[offset..]
        .iter()
        .zip(slow_series.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    let macd_line = *macd_series.last()?;
    let signal_line = math::ema(&macd_series, signal_period as usize)?;
    let histogram = macd_line - signal_line;

    Some(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
