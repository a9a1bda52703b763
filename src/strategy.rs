use std::collections::HashSet;

use crate::model::CoinRanking;

/// A coin must sit within the top this-many rows of every window's ranking
/// to qualify for the trend-following basket.
pub const TOP_RANK_CUTOFF: usize = 50;

/// Average returns for one strategy, one cell per configured window.
/// `None` means no basket member appeared in that window's ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReturns {
    pub strategy: String,
    pub by_window: Vec<Option<f64>>,
}

/// Trend-following basket: symbols in the top 50 of every window's ranking,
/// restricted to exchange-tradable symbols, sorted alphabetically.
///
/// Any empty window ranking, or an empty exchange set (including the case
/// where the exchange fetch failed and degraded to empty), collapses the
/// intersection toward empty. That is the intended behaviour, not an error.
pub fn trend_following_basket(
    rankings: &[CoinRanking],
    exchange_symbols: &HashSet<String>,
) -> Vec<String> {
    let mut iter = rankings.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut basket = first.top_symbols(TOP_RANK_CUTOFF);
    for ranking in iter {
        let top = ranking.top_symbols(TOP_RANK_CUTOFF);
        basket.retain(|s| top.contains(s));
    }
    basket.retain(|s| exchange_symbols.contains(s));

    let mut symbols: Vec<String> = basket.into_iter().collect();
    symbols.sort();
    symbols
}

/// Mean percentage change of the basket members present in `ranking`.
/// `None` when the ranking is empty or no member matches, which is distinct
/// from an average of zero.
pub fn average_return(basket: &[String], ranking: &CoinRanking) -> Option<f64> {
    if ranking.is_empty() {
        return None;
    }
    let mut total = 0.0;
    let mut matched = 0usize;
    for symbol in basket {
        if let Some(change) = ranking.change_for(symbol) {
            total += change;
            matched += 1;
        }
    }
    (matched > 0).then(|| total / matched as f64)
}

/// Build the returns row for one strategy across all fetched windows.
pub fn returns_row(strategy: &str, basket: &[String], rankings: &[CoinRanking]) -> StrategyReturns {
    StrategyReturns {
        strategy: strategy.to_string(),
        by_window: rankings
            .iter()
            .map(|ranking| average_return(basket, ranking))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoinRow, TimeWindow};

    fn ranking(window: TimeWindow, symbols: &[(&str, f64)]) -> CoinRanking {
        CoinRanking::new(
            window,
            symbols
                .iter()
                .map(|(symbol, change_pct)| CoinRow {
                    rank: None,
                    name: symbol.to_string(),
                    symbol: symbol.to_string(),
                    price: 1.0,
                    change_pct: *change_pct,
                })
                .collect(),
        )
    }

    fn exchange(symbols: &[&str]) -> HashSet<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trend_basket_intersects_windows_and_exchange_set() {
        let rankings: Vec<CoinRanking> = TimeWindow::ALL
            .iter()
            .map(|w| ranking(*w, &[("BTC", 3.0), ("ETH", 2.0), ("XRP", 1.0)]))
            .collect();
        let basket = trend_following_basket(&rankings, &exchange(&["BTC", "ETH"]));
        // XRP is in every window's top 50 but not exchange-tradable.
        assert_eq!(basket, vec!["BTC".to_string(), "ETH".to_string()]);
    }

    #[test]
    fn trend_basket_drops_symbols_missing_from_any_window() {
        let rankings = vec![
            ranking(TimeWindow::H24, &[("BTC", 3.0), ("ETH", 2.0)]),
            ranking(TimeWindow::D7, &[("BTC", 1.0)]),
        ];
        let basket = trend_following_basket(&rankings, &exchange(&["BTC", "ETH"]));
        assert_eq!(basket, vec!["BTC".to_string()]);
    }

    #[test]
    fn trend_basket_is_empty_when_any_window_is_empty() {
        let rankings = vec![
            ranking(TimeWindow::H24, &[("BTC", 3.0)]),
            CoinRanking::empty(TimeWindow::D7),
        ];
        let basket = trend_following_basket(&rankings, &exchange(&["BTC"]));
        assert!(basket.is_empty());
    }

    #[test]
    fn trend_basket_is_empty_when_exchange_set_is_empty() {
        let rankings: Vec<CoinRanking> = TimeWindow::ALL
            .iter()
            .map(|w| ranking(*w, &[("BTC", 3.0)]))
            .collect();
        let basket = trend_following_basket(&rankings, &HashSet::new());
        assert!(basket.is_empty());
    }

    #[test]
    fn trend_basket_only_considers_top_cutoff_rows() {
        // 60 rows per window; only the top 50 by change qualify.
        let rows: Vec<(String, f64)> = (0..60)
            .map(|i| (format!("C{i:02}"), 100.0 - i as f64))
            .collect();
        let refs: Vec<(&str, f64)> = rows.iter().map(|(s, c)| (s.as_str(), *c)).collect();
        let rankings = vec![
            ranking(TimeWindow::H24, &refs),
            ranking(TimeWindow::D7, &refs),
        ];
        let all: HashSet<String> = rows.iter().map(|(s, _)| s.clone()).collect();

        let basket = trend_following_basket(&rankings, &all);
        assert_eq!(basket.len(), TOP_RANK_CUTOFF);
        assert!(basket.contains(&"C00".to_string()));
        assert!(!basket.contains(&"C55".to_string()));
    }

    #[test]
    fn average_return_is_mean_of_matched_members() {
        let r = ranking(TimeWindow::H24, &[("BTC", 4.0), ("ETH", 2.0), ("SOL", -6.0)]);
        let basket = vec!["BTC".to_string(), "ETH".to_string(), "DOGE".to_string()];
        // DOGE is absent; mean over the two matches.
        assert_eq!(average_return(&basket, &r), Some(3.0));
    }

    #[test]
    fn average_return_is_none_not_zero_when_nothing_matches() {
        let r = ranking(TimeWindow::H24, &[("BTC", 4.0)]);
        let basket = vec!["DOGE".to_string()];
        assert_eq!(average_return(&basket, &r), None);
        assert_eq!(average_return(&[], &r), None);
        assert_eq!(
            average_return(&basket, &CoinRanking::empty(TimeWindow::H24)),
            None
        );
    }

    #[test]
    fn returns_row_covers_every_window_in_order() {
        let rankings = vec![
            ranking(TimeWindow::H24, &[("BTC", 2.0)]),
            CoinRanking::empty(TimeWindow::D7),
        ];
        let row = returns_row("Strategy A", &["BTC".to_string()], &rankings);
        assert_eq!(row.strategy, "Strategy A");
        assert_eq!(row.by_window, vec![Some(2.0), None]);
    }
}
