//! Swing structure analysis over the most recent bars.
//!
//! Classifies each adjacent pair of bars in the window by whether its high
//! and low rose or fell, then condenses the counts into a single strength
//! score. Four hours of 15-minute bars is the intended window.

use crate::models::candle::Candle;
use crate::models::trend::TrendShape;

/// Minimum series length before swing analysis is attempted.
pub const MIN_CANDLES: usize = 20;

/// Number of most-recent bars inspected.
pub const SWING_WINDOW: usize = 16;

/// Worst-case transition count: 15 adjacent pairs on both the high and the
/// low series. Ties count toward neither side, so this is a bound on the
/// numerator, not the observed count.
const MAX_TRANSITIONS: f64 = 30.0;

/// Analyze the swing structure of the last [`SWING_WINDOW`] bars.
///
/// Returns `None` when the series is shorter than [`MIN_CANDLES`]; callers
/// treat that the same as any other insufficient-data case.
pub fn analyze_trend_shape(candles: &[Candle]) -> Option<TrendShape> {
    if candles.len() < MIN_CANDLES {
        return None;
    }

    let window = &candles[candles.len() - SWING_WINDOW..];
    let mut shape = TrendShape::default();

    for pair in window.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        if current.high > previous.high {
            shape.higher_highs += 1;
        } else if current.high < previous.high {
            shape.lower_highs += 1;
        }

        if current.low > previous.low {
            shape.higher_lows += 1;
        } else if current.low < previous.low {
            shape.lower_lows += 1;
        }
    }

    let net = shape.higher_highs as f64 + shape.higher_lows as f64
        - shape.lower_highs as f64
        - shape.lower_lows as f64;
    shape.trend_strength = net / MAX_TRANSITIONS;

    Some(shape)
}
