//! Message delivery interface.

use async_trait::async_trait;

/// Narrow contract for posting a rendered report somewhere.
///
/// Delivery failures are the caller's to log; they never abort a run.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
