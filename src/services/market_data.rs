//! Market data provider interface.

use crate::models::candle::Candle;
use async_trait::async_trait;

/// Narrow contract for fetching bar history from a remote provider.
///
/// Implementations own their transport concerns (timeouts, retries); a
/// failed fetch surfaces as an error the pipeline treats as insufficient
/// data for that tick.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch chronologically ascending candles for `symbol` covering
    /// `range` (for example "5d") at `interval` (for example "15m").
    async fn fetch_series(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;
}
