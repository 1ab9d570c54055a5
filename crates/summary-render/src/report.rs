//! One-page report rendering.

use crate::format::{format_currency, format_metric};
use summary_config::{Theme, APP_NAME, APP_VERSION, DISCLAIMER};
use summary_core::{InvestmentSummary, RiskLevel};

const RULE: &str =
    "================================================================================";
const THIN_RULE: &str =
    "--------------------------------------------------------------------------------";

fn risk_marker(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "🟢",
        RiskLevel::Moderate => "🟡",
        RiskLevel::High => "🔴",
    }
}

fn is_success_sentinel(flag: &str) -> bool {
    flag.starts_with("No major red flags")
}

/// Render the full one-page summary as plain text.
pub fn render_text(summary: &InvestmentSummary) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("  {} v{}\n", APP_NAME, APP_VERSION));
    out.push_str(&format!(
        "  Investment Summary - {} ({})\n",
        summary.ticker, summary.company_name
    ));
    out.push_str(&format!(
        "  Generated: {}\n",
        summary.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str("KEY METRICS\n");
    for (name, value) in summary.key_metrics.entries() {
        out.push_str(&format!("  {:<16} {}\n", name, format_metric(name, value)));
    }
    out.push('\n');

    out.push_str("BULL CASE\n");
    for (i, point) in summary.bull_case.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, point));
    }
    out.push('\n');

    out.push_str("BEAR CASE\n");
    for (i, point) in summary.bear_case.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, point));
    }
    out.push('\n');

    out.push_str("RISK ASSESSMENT\n");
    for (category, level) in summary.risks.entries() {
        out.push_str(&format!(
            "  {} {:<18} {}\n",
            risk_marker(level),
            category,
            level
        ));
    }
    out.push('\n');

    out.push_str("VALUATION RANGE\n");
    out.push_str(&format!(
        "  Bear Case   {:<14} ({}%)\n",
        format_currency(summary.valuation.bear_case),
        summary.valuation.bear_pct
    ));
    out.push_str(&format!(
        "  Base Case   {:<14} (Current)\n",
        format_currency(summary.valuation.base_case)
    ));
    out.push_str(&format!(
        "  Bull Case   {:<14} (+{}%)\n",
        format_currency(summary.valuation.bull_case),
        summary.valuation.bull_pct
    ));
    out.push('\n');

    out.push_str("RED FLAGS & CONCERNS\n");
    for flag in &summary.red_flags {
        let marker = if is_success_sentinel(flag) { "✅" } else { "⚠️" };
        out.push_str(&format!("  {} {}\n", marker, flag));
    }
    out.push('\n');

    out.push_str(THIN_RULE);
    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');

    out
}

/// Render the summary as a standalone HTML page styled with the theme.
pub fn render_html(summary: &InvestmentSummary, theme: &Theme) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<header class=\"banner\"><h1>{} v{}</h1><h2>{} ({})</h2></header>\n",
        APP_NAME, APP_VERSION, summary.ticker, summary.company_name
    ));

    body.push_str("<section><h3>Key Metrics</h3><table>\n");
    for (name, value) in summary.key_metrics.entries() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            name,
            format_metric(name, value)
        ));
    }
    body.push_str("</table></section>\n");

    body.push_str("<section class=\"bull\"><h3>Bull Case</h3><ol>\n");
    for point in &summary.bull_case {
        body.push_str(&format!("<li>{}</li>\n", point));
    }
    body.push_str("</ol></section>\n");

    body.push_str("<section class=\"bear\"><h3>Bear Case</h3><ol>\n");
    for point in &summary.bear_case {
        body.push_str(&format!("<li>{}</li>\n", point));
    }
    body.push_str("</ol></section>\n");

    body.push_str("<section><h3>Risk Assessment</h3><table>\n");
    for (category, level) in summary.risks.entries() {
        body.push_str(&format!(
            "<tr><td>{}</td><td class=\"risk-{}\">{}</td></tr>\n",
            category,
            level.as_str().to_lowercase(),
            level
        ));
    }
    body.push_str("</table></section>\n");

    body.push_str(&format!(
        "<section><h3>Valuation Range</h3>\
         <div class=\"val\">Bear {} ({}%)</div>\
         <div class=\"val\">Base {} (Current)</div>\
         <div class=\"val\">Bull {} (+{}%)</div></section>\n",
        format_currency(summary.valuation.bear_case),
        summary.valuation.bear_pct,
        format_currency(summary.valuation.base_case),
        format_currency(summary.valuation.bull_case),
        summary.valuation.bull_pct
    ));

    body.push_str("<section><h3>Red Flags &amp; Concerns</h3><ul>\n");
    for flag in &summary.red_flags {
        let class = if is_success_sentinel(flag) { "flag-ok" } else { "flag-warn" };
        body.push_str(&format!("<li class=\"{}\">{}</li>\n", class, flag));
    }
    body.push_str("</ul></section>\n");

    body.push_str(&format!("<footer>{}</footer>\n", DISCLAIMER));

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
         <title>{} - Investment Summary</title>\n<style>\n\
         body {{ background: {}; color: {}; font-family: sans-serif; }}\n\
         .banner {{ background: {}; padding: 16px; border-radius: 8px; }}\n\
         .bull h3 {{ color: #4caf50; }}\n\
         .bear h3 {{ color: #f44336; }}\n\
         .risk-low {{ color: #4caf50; font-weight: bold; }}\n\
         .risk-moderate {{ color: #ff9800; font-weight: bold; }}\n\
         .risk-high {{ color: #f44336; font-weight: bold; }}\n\
         .flag-warn {{ color: #ff9800; }}\n\
         .flag-ok {{ color: #4caf50; }}\n\
         footer {{ color: {}; margin-top: 24px; font-size: small; }}\n\
         </style></head>\n<body>\n{}</body></html>\n",
        summary.ticker, theme.background, theme.text, theme.primary, theme.secondary, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use summary_core::{KeyMetrics, RiskAssessment, ValuationRange};

    fn sample_summary() -> InvestmentSummary {
        InvestmentSummary {
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            generated_at: Utc::now(),
            bull_case: vec![
                "Strong profitability: ROE of 28.0%, indicating efficient use of shareholder capital".to_string(),
                "Healthy margins: Gross margin of 44.0%, demonstrating pricing power".to_string(),
                "Strong operating efficiency: Operating margin of 30.0%".to_string(),
            ],
            bear_case: vec![
                "Premium valuation: P/E ratio of 31.2x may limit upside potential".to_string(),
                "Competitive pressure may compress margins over time".to_string(),
                "Macroeconomic sensitivity could impact near-term results".to_string(),
            ],
            risks: RiskAssessment {
                financial_health: RiskLevel::Moderate,
                valuation: RiskLevel::Moderate,
                growth: RiskLevel::Moderate,
                liquidity: RiskLevel::High,
                profitability: RiskLevel::Low,
            },
            red_flags: vec![
                "No major red flags detected - fundamentals appear healthy".to_string(),
            ],
            valuation: ValuationRange {
                bear_case: 149.86,
                base_case: 187.33,
                bull_case: 234.16,
                bear_pct: -20,
                bull_pct: 25,
            },
            key_metrics: KeyMetrics {
                current_price: Some(187.33),
                pe_ratio: Some(31.2),
                market_cap: Some(2.9e12),
                revenue: Some(383.3e9),
                net_income: Some(97.0e9),
                roe: Some(0.28),
                debt_to_equity: Some(1.95),
                current_ratio: Some(0.99),
            },
        }
    }

    #[test]
    fn text_report_contains_every_section() {
        let text = render_text(&sample_summary());

        for heading in [
            "KEY METRICS",
            "BULL CASE",
            "BEAR CASE",
            "RISK ASSESSMENT",
            "VALUATION RANGE",
            "RED FLAGS & CONCERNS",
        ] {
            assert!(text.contains(heading), "missing section {heading}");
        }
        assert!(text.contains("Investment Summary - AAPL (Apple Inc.)"));
        assert!(text.contains("$187.33"));
        assert!(text.contains("$149.86"));
        assert!(text.contains("(-20%)"));
        assert!(text.contains("(+25%)"));
        assert!(text.contains("✅ No major red flags detected"));
        assert!(text.contains(DISCLAIMER));
    }

    #[test]
    fn text_report_marks_warnings() {
        let mut summary = sample_summary();
        summary.red_flags =
            vec!["High leverage (2.50x D/E) - elevated bankruptcy risk".to_string()];
        let text = render_text(&summary);
        assert!(text.contains("⚠️ High leverage (2.50x D/E)"));
        assert!(!text.contains("✅"));
    }

    #[test]
    fn html_report_uses_theme_colors() {
        let theme = Theme::blue_corporate();
        let html = render_html(&sample_summary(), &theme);

        assert!(html.contains("#1e88e5"));
        assert!(html.contains("#0a0e27"));
        assert!(html.contains("class=\"risk-high\""));
        assert!(html.contains("<li class=\"flag-ok\">"));
        assert!(html.contains("AAPL - Investment Summary"));
    }
}
