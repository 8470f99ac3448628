//! Indicator snapshot assembly from a candle series.

use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::candle::Candle;
use crate::models::indicators::IndicatorSnapshot;

/// Minimum bars before any indicator is computed; the 50-period SMA is the
/// slowest lookback in the set.
pub const MIN_CANDLES: usize = 50;

/// Compute the full indicator snapshot for the end of the series.
///
/// Series shorter than [`MIN_CANDLES`] yield an empty snapshot; callers
/// check `is_empty()` and abstain for that tick. Individual indicators that
/// cannot be computed simply stay absent, they never fail the whole
/// snapshot.
pub fn compute_snapshot(candles: &[Candle]) -> IndicatorSnapshot {
    if candles.len() < MIN_CANDLES {
        return IndicatorSnapshot::default();
    }

    let mut snapshot = IndicatorSnapshot::default();

    if let Some(rsi) = calculate_rsi_default(candles) {
        snapshot.rsi = Some(rsi.value);
    }

    snapshot.sma_20 = calculate_sma(candles, 20).map(|sma| sma.value);
    snapshot.sma_50 = calculate_sma(candles, 50).map(|sma| sma.value);

    if let Some(macd) = calculate_macd_default(candles) {
        snapshot.macd = Some(macd.macd);
        snapshot.macd_signal = Some(macd.signal);
        snapshot.macd_hist = Some(macd.histogram);
    }

    if let Some(bands) = calculate_bollinger_bands_default(candles) {
        snapshot.bb_upper = Some(bands.upper);
        snapshot.bb_middle = Some(bands.middle);
        snapshot.bb_lower = Some(bands.lower);

        // Flat bands have no inside/outside, so the position stays absent
        // and resolves to the neutral 0.5 downstream.
        let width = bands.upper - bands.lower;
        if width > 0.0 {
            if let Some(last) = candles.last() {
                snapshot.bb_position = Some((last.close - bands.lower) / width);
            }
        }
    }

    snapshot
}
