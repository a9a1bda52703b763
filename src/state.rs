use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::upstream::MarketClient;

/// Shared application state, passed to the route handler via
/// `axum::extract::State`. Holds no mutable data: every request recomputes
/// everything from fresh upstream responses.
pub struct AppState {
    pub config: AppConfig,
    pub client: MarketClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>, FetchError> {
        let client = MarketClient::new(&config)?;
        Ok(Arc::new(Self { config, client }))
    }
}
