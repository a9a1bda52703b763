use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::upstream::MarketClient;

/// Envelope status the exchange uses to signal success.
const STATUS_OK: &str = "0000";

/// Ticker response envelope. `data` maps symbol → ticker fields, with one
/// non-coin `date` timestamp key mixed in.
#[derive(Debug, Deserialize)]
struct TickerEnvelope {
    status: String,
    data: Option<HashMap<String, Value>>,
}

/// Fetch the set of symbols tradable on the exchange.
///
/// Callers treat a failure as "no exchange filter available" and degrade to
/// an empty set; this function only reports what went wrong.
pub async fn tradable_symbols(client: &MarketClient) -> Result<HashSet<String>, FetchError> {
    let body = client.get_json(client.ticker_url(), &[]).await?;
    let symbols = parse_symbols(&body)?;
    debug!(count = symbols.len(), "fetched tradable exchange symbols");
    Ok(symbols)
}

fn parse_symbols(body: &Value) -> Result<HashSet<String>, FetchError> {
    let envelope: TickerEnvelope = serde_json::from_value(body.clone())
        .map_err(|e| FetchError::Shape(format!("unexpected ticker envelope: {e}")))?;

    if envelope.status != STATUS_OK {
        return Err(FetchError::Envelope(format!(
            "exchange reported status {}",
            envelope.status
        )));
    }

    let data = envelope
        .data
        .ok_or_else(|| FetchError::Shape("ticker envelope has no data field".to_string()))?;

    Ok(data
        .keys()
        .filter(|k| k.as_str() != "date")
        .map(|k| k.to_uppercase())
        .collect())
}
