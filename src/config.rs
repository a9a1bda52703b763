use std::env;

/// Service configuration derived from environment variables.
///
/// `PORT` is kept bare (no prefix) so the service can run unchanged on
/// platforms that inject it; everything else is namespaced.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    /// Per-request timeout for upstream API calls, in seconds.
    pub http_timeout_s: u64,
    /// CoinGecko API base, e.g. `https://api.coingecko.com/api/v3`.
    pub coingecko_api_url: String,
    /// Full URL of the Bithumb all-tickers endpoint.
    pub bithumb_ticker_url: String,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind: env_str("COINDASH_BIND", "0.0.0.0"),
            port: env_u16("PORT", 5000),
            http_timeout_s: env_u64("COINDASH_HTTP_TIMEOUT_S", 10).max(1),
            coingecko_api_url: env_str(
                "COINDASH_COINGECKO_URL",
                "https://api.coingecko.com/api/v3",
            ),
            bithumb_ticker_url: env_str(
                "COINDASH_BITHUMB_URL",
                "https://api.bithumb.com/public/ticker/ALL_KRW",
            ),
        }
    }
}
