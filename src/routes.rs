use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use futures::future;
use tracing::warn;

use crate::model::{CoinRanking, TimeWindow};
use crate::state::AppState;
use crate::upstream::{bithumb, coingecko};
use crate::{render, strategy};

/// Assemble the router. The dashboard exposes exactly one route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// The whole pipeline, per request: fetch everything, derive the two
/// baskets, compute the returns table, render. Every fetch failure degrades
/// to the empty value at its own scope, so this handler always answers 200
/// with a page — sparse data shows up as empty lists and N/A cells.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let client = &state.client;

    // The six upstream calls are data-independent; run them concurrently.
    let (exchange_res, market_cap_res, ranking_results) = tokio::join!(
        bithumb::tradable_symbols(client),
        coingecko::top_by_market_cap(client),
        future::join_all(
            TimeWindow::ALL
                .iter()
                .map(|window| coingecko::fetch_ranking(client, *window)),
        ),
    );

    let exchange_symbols = exchange_res.unwrap_or_else(|e| {
        warn!(error = %e, "exchange symbol fetch failed; no exchange filter available");
        HashSet::new()
    });
    let market_cap_basket = market_cap_res.unwrap_or_else(|e| {
        warn!(error = %e, "market-cap fetch failed; basket degrades to empty");
        Vec::new()
    });
    let rankings: Vec<CoinRanking> = ranking_results
        .into_iter()
        .zip(TimeWindow::ALL)
        .map(|(res, window)| {
            res.unwrap_or_else(|e| {
                warn!(window = %window, error = %e, "ranking fetch failed; window degrades to empty");
                CoinRanking::empty(window)
            })
        })
        .collect();

    let trend_basket = strategy::trend_following_basket(&rankings, &exchange_symbols);
    let returns = [
        strategy::returns_row("Strategy A", &trend_basket, &rankings),
        strategy::returns_row("Strategy B", &market_cap_basket, &rankings),
    ];

    Html(render::render_page(&trend_basket, &market_cap_basket, &returns))
}
