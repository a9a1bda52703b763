use std::fmt::Write;

use crate::model::TimeWindow;
use crate::strategy::StrategyReturns;

const PAGE_STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            margin: 40px;
            background-color: #f0f2f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background-color: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .strategy-section {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 5px;
            margin-top: 20px;
        }
        .coin-list {
            display: flex;
            flex-wrap: wrap;
            gap: 10px;
            margin-top: 15px;
        }
        .coin-tag {
            background: #e9ecef;
            padding: 5px 10px;
            border-radius: 15px;
            font-size: 14px;
        }
        .returns-table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 15px;
        }
        .returns-table th, .returns-table td {
            padding: 10px;
            border: 1px solid #dee2e6;
            text-align: center;
        }
        .returns-table th {
            background: #f1f3f5;
        }
        .positive-return {
            color: #28a745;
        }
        .negative-return {
            color: #dc3545;
        }
        h1 {
            color: #2c3e50;
            margin-bottom: 30px;
        }
        h2 {
            color: #34495e;
            margin-top: 25px;
        }
        .refresh-btn {
            display: inline-block;
            padding: 10px 20px;
            background-color: #007bff;
            color: white;
            text-decoration: none;
            border-radius: 5px;
            margin-top: 30px;
        }
        .refresh-btn:hover {
            background-color: #0056b3;
        }
"#;

/// Render the dashboard page.
///
/// Pure function of its inputs: identical baskets and returns always yield
/// byte-identical HTML. All rendered values are symbols or formatted
/// numbers, so no escaping is applied.
pub fn render_page(
    trend_basket: &[String],
    market_cap_basket: &[String],
    returns: &[StrategyReturns],
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <title>Crypto Investment Strategy Analyzer</title>\n");
    html.push_str("    <style>");
    html.push_str(PAGE_STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    html.push_str("        <h1>Crypto Investment Strategy Analyzer</h1>\n");

    push_basket_section(
        &mut html,
        "Strategy A (Trend Following)",
        "Exchange-tradable coins ranked in the top 50 across every window:",
        trend_basket,
    );
    push_basket_section(
        &mut html,
        "Strategy B (Market Cap)",
        "Top 10 coins by market capitalisation:",
        market_cap_basket,
    );

    html.push_str("        <div class=\"strategy-section\">\n");
    html.push_str("            <h2>Average Returns by Strategy</h2>\n");
    push_returns_table(&mut html, returns);
    html.push_str("        </div>\n");

    html.push_str("        <a href=\"/\" class=\"refresh-btn\">Refresh</a>\n");
    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

fn push_basket_section(html: &mut String, title: &str, caption: &str, basket: &[String]) {
    html.push_str("        <div class=\"strategy-section\">\n");
    let _ = writeln!(html, "            <h2>{title}</h2>");
    let _ = writeln!(html, "            <p>{caption}</p>");
    html.push_str("            <div class=\"coin-list\">\n");
    for symbol in basket {
        let _ = writeln!(html, "                <span class=\"coin-tag\">{symbol}</span>");
    }
    html.push_str("            </div>\n        </div>\n");
}

fn push_returns_table(html: &mut String, returns: &[StrategyReturns]) {
    html.push_str("            <table class=\"returns-table\">\n                <tr><th>Strategy</th>");
    for window in TimeWindow::ALL {
        let _ = write!(html, "<th>{window}</th>");
    }
    html.push_str("</tr>\n");

    for row in returns {
        let _ = write!(html, "                <tr><td>{}</td>", row.strategy);
        for cell in &row.by_window {
            html.push_str(&render_cell(*cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("            </table>\n");
}

fn render_cell(avg: Option<f64>) -> String {
    match avg {
        Some(avg) => {
            let class = if avg > 0.0 {
                "positive-return"
            } else {
                "negative-return"
            };
            format!("<td class=\"{class}\">{avg:.2}%</td>")
        }
        None => "<td>N/A</td>".to_string(),
    }
}
