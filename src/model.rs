use std::cmp::Ordering;
use std::collections::HashSet;

/// The fixed set of look-back windows the dashboard evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    H24,
    D7,
    D14,
    D30,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [Self::H24, Self::D7, Self::D14, Self::D30];

    /// CoinGecko window key, as used in query params and field names.
    pub fn key(self) -> &'static str {
        match self {
            Self::H24 => "24h",
            Self::D7 => "7d",
            Self::D14 => "14d",
            Self::D30 => "30d",
        }
    }

    /// Per-coin JSON field carrying this window's percentage change.
    pub fn change_field(self) -> String {
        format!("price_change_percentage_{}", self.key())
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One coin in a ranking: identity plus the change value for the
/// ranking's window.
#[derive(Debug, Clone)]
pub struct CoinRow {
    pub rank: Option<u32>,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
}

/// Ranked coin listing for one time window, sorted descending by
/// `change_pct`. Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CoinRanking {
    pub window: TimeWindow,
    pub rows: Vec<CoinRow>,
}

impl CoinRanking {
    pub fn new(window: TimeWindow, mut rows: Vec<CoinRow>) -> Self {
        rows.sort_by(|a, b| {
            b.change_pct
                .partial_cmp(&a.change_pct)
                .unwrap_or(Ordering::Equal)
        });
        Self { window, rows }
    }

    pub fn empty(window: TimeWindow) -> Self {
        Self {
            window,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Symbols of the first `n` rows.
    pub fn top_symbols(&self, n: usize) -> HashSet<String> {
        self.rows.iter().take(n).map(|r| r.symbol.clone()).collect()
    }

    /// Change value for `symbol`, if it appears in this ranking.
    pub fn change_for(&self, symbol: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.symbol == symbol)
            .map(|r| r.change_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, change_pct: f64) -> CoinRow {
        CoinRow {
            rank: None,
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            price: 1.0,
            change_pct,
        }
    }

    #[test]
    fn window_keys_match_coingecko_fields() {
        assert_eq!(TimeWindow::H24.key(), "24h");
        assert_eq!(TimeWindow::D30.change_field(), "price_change_percentage_30d");
        assert_eq!(TimeWindow::ALL.len(), 4);
    }

    #[test]
    fn new_sorts_rows_descending_by_change() {
        let ranking = CoinRanking::new(
            TimeWindow::H24,
            vec![row("A", -2.0), row("B", 5.0), row("C", 1.5)],
        );
        let symbols: Vec<&str> = ranking.rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B", "C", "A"]);
    }

    #[test]
    fn top_symbols_and_change_lookup() {
        let ranking = CoinRanking::new(
            TimeWindow::D7,
            vec![row("BTC", 3.0), row("ETH", 2.0), row("XRP", 1.0)],
        );
        let top2 = ranking.top_symbols(2);
        assert!(top2.contains("BTC") && top2.contains("ETH"));
        assert!(!top2.contains("XRP"));

        assert_eq!(ranking.change_for("ETH"), Some(2.0));
        assert_eq!(ranking.change_for("DOGE"), None);
    }
}
