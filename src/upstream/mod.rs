pub mod bithumb;
pub mod coingecko;

use std::time::Duration;

use serde_json::Value;

use crate::config::AppConfig;
use crate::error::FetchError;

/// Shared HTTP client for both upstream APIs.
///
/// Every request carries the configured timeout; a timed-out call surfaces
/// as a `FetchError::Transport` and degrades like any other fetch failure.
pub struct MarketClient {
    http: reqwest::Client,
    coingecko_api_url: String,
    bithumb_ticker_url: String,
}

impl MarketClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_s))
            .user_agent(concat!("coindash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            coingecko_api_url: cfg.coingecko_api_url.clone(),
            bithumb_ticker_url: cfg.bithumb_ticker_url.clone(),
        })
    }

    pub fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.coingecko_api_url)
    }

    pub fn ticker_url(&self) -> &str {
        &self.bithumb_ticker_url
    }

    /// GET `url` with `query` and parse the body as JSON.
    pub async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let resp = self.http.get(url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!("{url} returned HTTP {status}")));
        }
        let body = resp
            .json()
            .await
            .map_err(|e| FetchError::Shape(format!("{url} body is not JSON: {e}")))?;
        Ok(body)
    }
}
