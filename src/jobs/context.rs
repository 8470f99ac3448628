//! Job context for dependency injection

use crate::config::Config;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;
use std::sync::Arc;

/// Context passed to job handlers via the apalis Data<T> pattern
///
/// Carries the two external collaborators (market data in, messages out)
/// plus the startup configuration. Handlers never construct connections
/// themselves.
pub struct JobContext {
    pub provider: Arc<dyn MarketDataProvider + Send + Sync>,
    pub notifier: Arc<dyn Notifier + Send + Sync>,
    pub config: Arc<Config>,
}

impl JobContext {
    pub fn new(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            provider,
            notifier,
            config,
        }
    }
}
