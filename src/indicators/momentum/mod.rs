pub mod macd;
pub mod rsi;

pub use macd::{calculate_macd, calculate_macd_default};
pub use rsi::{calculate_rsi, calculate_rsi_default};
