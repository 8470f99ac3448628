use serde::{Deserialize, Serialize};

/// Swing structure counts over the analyzed window, plus the derived
/// strength score. Ties in the bar-to-bar comparisons count toward neither
/// side, so the four counters need not sum to the window size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendShape {
    pub higher_highs: u32,
    pub lower_highs: u32,
    pub higher_lows: u32,
    pub lower_lows: u32,
    /// Net swing score normalized to [-1, 1].
    pub trend_strength: f64,
}
