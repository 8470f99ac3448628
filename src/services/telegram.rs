//! Telegram Bot API message delivery.

use crate::services::notifier::Notifier;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, bot_token, chat_id)
    }

    /// Point the notifier at a different endpoint (used by tests to target
    /// a local mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = [
            ("chat_id", self.chat_id.as_str()),
            ("text", text),
            ("parse_mode", "HTML"),
        ];

        let response = self.client.post(&url).form(&payload).send().await?;
        let status = response.status();

        if status.is_success() {
            debug!("message delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "message delivery failed");
            Err(Box::new(std::io::Error::other(format!(
                "Telegram returned status {}",
                status
            ))) as Box<dyn std::error::Error + Send + Sync>)
        }
    }
}
