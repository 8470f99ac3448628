//! Yahoo Finance market data provider.
//!
//! Reads the unofficial chart API. Responses carry parallel arrays of
//! timestamps and quote fields with possible nulls; rows without a usable
//! close are dropped.

use crate::models::candle::Candle;
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
// Yahoo rejects requests without a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

pub struct YahooFinanceProvider {
    client: Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different endpoint (used by tests to target
    /// a local mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn request_chart(
        &self,
        url: &str,
    ) -> Result<ChartResponse, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Box::new(std::io::Error::other(format!(
                "Yahoo Finance returned status {}",
                response.status()
            ))) as Box<dyn std::error::Error + Send + Sync>);
        }

        let data: ChartResponse = response.json().await?;
        Ok(data)
    }

    fn candles_from_response(
        data: ChartResponse,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(error) = data.chart.error {
            return Err(Box::new(std::io::Error::other(format!(
                "Yahoo API error: {} - {}",
                error.code, error.description
            ))) as Box<dyn std::error::Error + Send + Sync>);
        }

        let result = data
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| {
                Box::new(std::io::Error::other("Empty chart result"))
                    as Box<dyn std::error::Error + Send + Sync>
            })?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| {
                Box::new(std::io::Error::other("No quote data in chart result"))
                    as Box<dyn std::error::Error + Send + Sync>
            })?;

        let opens = quote.open.unwrap_or_default();
        let highs = quote.high.unwrap_or_default();
        let lows = quote.low.unwrap_or_default();
        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let close = closes.get(i).and_then(|v| *v).unwrap_or(0.0);
            // Null or non-positive closes mark gaps in the feed.
            if close <= 0.0 {
                continue;
            }

            let Some(timestamp) = DateTime::from_timestamp(ts, 0) else {
                continue;
            };

            candles.push(Candle::new(
                opens.get(i).and_then(|v| *v).unwrap_or(close),
                highs.get(i).and_then(|v| *v).unwrap_or(close),
                lows.get(i).and_then(|v| *v).unwrap_or(close),
                close,
                volumes.get(i).and_then(|v| *v).unwrap_or(0) as f64,
                timestamp,
            ));
        }

        Ok(candles)
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_series(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}&includePrePost=false",
            self.base_url, symbol, range, interval
        );

        debug!(symbol = %symbol, range = %range, interval = %interval, "fetching chart data");

        let data = (|| self.request_chart(&url))
            .retry(ExponentialBuilder::default().with_max_times(2))
            .notify(|err, delay| {
                warn!(
                    symbol = %symbol,
                    error = %err,
                    retry_in_ms = delay.as_millis(),
                    "chart request failed, retrying"
                );
            })
            .await?;

        let candles = Self::candles_from_response(data)?;
        debug!(symbol = %symbol, count = candles.len(), "fetched {} candles", candles.len());
        Ok(candles)
    }
}
