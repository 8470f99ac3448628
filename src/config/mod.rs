//! Process configuration assembled once at startup from the environment.

use std::env;

/// Runtime settings for the worker. Constructed once in the binary and
/// passed explicitly into the collaborators that need it; the scoring
/// components never see it.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    /// Ordered (instrument name, provider ticker) pairs. Order decides the
    /// delivery order of per-instrument messages.
    pub instruments: Vec<(String, String)>,
    /// History window for the analysis fetch, in provider range syntax.
    pub lookback_range: String,
    /// History window for the daily summary fetch.
    pub summary_range: String,
    pub bar_interval: String,
    /// Pause between per-instrument messages, in seconds.
    pub message_gap_secs: u64,
}

impl Config {
    /// Read configuration from the environment. Missing credentials are a
    /// hard startup error; everything else has a default.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| "TELEGRAM_BOT_TOKEN must be set")?;
        let chat_id = env::var("TELEGRAM_CHANNEL_ID")
            .map_err(|_| "TELEGRAM_CHANNEL_ID must be set")?;

        let instruments = match env::var("INSTRUMENTS") {
            Ok(raw) => {
                let parsed = parse_instruments(&raw);
                if parsed.is_empty() {
                    return Err(format!("INSTRUMENTS is set but unparsable: '{}'", raw).into());
                }
                parsed
            }
            Err(_) => default_instruments(),
        };

        let message_gap_secs = env::var("MESSAGE_GAP_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            bot_token,
            chat_id,
            instruments,
            lookback_range: env::var("LOOKBACK_RANGE").unwrap_or_else(|_| "5d".to_string()),
            summary_range: env::var("SUMMARY_RANGE").unwrap_or_else(|_| "1mo".to_string()),
            bar_interval: env::var("BAR_INTERVAL").unwrap_or_else(|_| "15m".to_string()),
            message_gap_secs,
        })
    }
}

/// The metals tracked when INSTRUMENTS is not set: COMEX gold and silver
/// front-month futures.
pub fn default_instruments() -> Vec<(String, String)> {
    vec![
        ("gold".to_string(), "GC=F".to_string()),
        ("silver".to_string(), "SI=F".to_string()),
    ]
}

/// Parse "name=SYMBOL,name=SYMBOL" pairs. Tickers may themselves contain
/// '=' (futures like GC=F), so only the first '=' per entry splits.
fn parse_instruments(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (name, symbol) = entry.split_once('=')?;
            if name.is_empty() || symbol.is_empty() {
                return None;
            }
            Some((name.to_string(), symbol.to_string()))
        })
        .collect()
}

/// Deployment environment name, used to pick the logging flavor.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
