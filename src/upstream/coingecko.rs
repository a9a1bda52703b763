use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::model::{CoinRanking, CoinRow, TimeWindow};
use crate::upstream::MarketClient;

/// Entries requested per listings call.
const PAGE_SIZE: &str = "100";

/// Stable-value coins excluded from the market-cap basket.
const STABLECOINS: [&str; 7] = ["USDT", "USDC", "DAI", "BUSD", "TUSD", "USDP", "USDD"];

/// Size of the market-cap basket.
pub const MARKET_CAP_BASKET_SIZE: usize = 10;

/// Fetch the coin ranking for one time window, ordered descending by that
/// window's percentage change.
pub async fn fetch_ranking(
    client: &MarketClient,
    window: TimeWindow,
) -> Result<CoinRanking, FetchError> {
    let order = format!("price_change_percentage_{}_desc", window.key());
    let body = client
        .get_json(
            &client.markets_url(),
            &[
                ("vs_currency", "usd"),
                ("order", &order),
                ("per_page", PAGE_SIZE),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", window.key()),
            ],
        )
        .await?;
    parse_ranking(&body, window)
}

/// Fetch the top-10 symbols by market cap, stablecoins excluded.
pub async fn top_by_market_cap(client: &MarketClient) -> Result<Vec<String>, FetchError> {
    let body = client
        .get_json(
            &client.markets_url(),
            &[
                ("vs_currency", "usd"),
                ("order", "market_cap_desc"),
                ("per_page", PAGE_SIZE),
                ("page", "1"),
                ("sparkline", "false"),
            ],
        )
        .await?;
    parse_market_cap_symbols(&body, MARKET_CAP_BASKET_SIZE)
}

/// Parse a listings body into a ranking for `window`.
///
/// Entries missing the window's change field are skipped; the survivors are
/// re-sorted descending by change rather than trusting upstream ordering.
fn parse_ranking(body: &Value, window: TimeWindow) -> Result<CoinRanking, FetchError> {
    let entries = as_listing_array(body)?;
    let change_field = window.change_field();

    let mut rows = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            skipped += 1;
            continue;
        };
        let Some(change_pct) = obj.get(&change_field).and_then(Value::as_f64) else {
            skipped += 1;
            continue;
        };
        rows.push(CoinRow {
            rank: obj
                .get("market_cap_rank")
                .and_then(Value::as_u64)
                .map(|r| r as u32),
            name: obj
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            symbol: obj
                .get("symbol")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_uppercase(),
            price: obj
                .get("current_price")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            change_pct,
        });
    }

    if skipped > 0 {
        debug!(
            window = %window,
            skipped,
            total = entries.len(),
            "skipped listing entries without a usable change field"
        );
    }

    Ok(CoinRanking::new(window, rows))
}

/// Parse a market-cap listings body into at most `limit` non-stablecoin
/// symbols, in the order upstream returned them.
fn parse_market_cap_symbols(body: &Value, limit: usize) -> Result<Vec<String>, FetchError> {
    let entries = as_listing_array(body)?;

    let mut symbols = Vec::with_capacity(limit);
    for entry in entries {
        let Some(symbol) = entry.get("symbol").and_then(Value::as_str) else {
            continue;
        };
        let symbol = symbol.to_uppercase();
        if STABLECOINS.contains(&symbol.as_str()) {
            continue;
        }
        symbols.push(symbol);
        if symbols.len() == limit {
            break;
        }
    }
    Ok(symbols)
}

fn as_listing_array(body: &Value) -> Result<&Vec<Value>, FetchError> {
    body.as_array().ok_or_else(|| {
        // API errors (rate limits etc.) come back as an object.
        FetchError::Shape(format!("listings body is not an array: {body}"))
    })
}
