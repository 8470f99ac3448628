pub mod calculator;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use calculator::{compute_snapshot, MIN_CANDLES};
