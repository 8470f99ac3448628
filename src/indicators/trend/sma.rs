//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::SmaIndicator;

/// Calculate the SMA of closing prices over `period` bars
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = math::sma(&closes, period as usize)?;

    Some(SmaIndicator { value, period })
}
