use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized company financial snapshot.
///
/// Ratio and growth maps are loosely typed on purpose: upstream data feeds
/// routinely deliver nulls, strings, or missing keys, and the judgment layer
/// must degrade to defaults rather than fail (see [`FinancialSnapshot::ratio`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub ticker: String,
    #[serde(default)]
    pub company_name: String,
    /// Ratio name -> value. Known keys: ROE, Gross_Margin, Operating_Margin,
    /// Current_Ratio, Debt_to_Equity, PE_Ratio, Current_Price, Market_Cap,
    /// Total_Revenue, Net_Income, Operating_Cash_Flow. None guaranteed present.
    #[serde(default)]
    pub ratios: Map<String, Value>,
    /// Growth metric name -> value. Known key: Total_Revenue_CAGR.
    #[serde(default)]
    pub growth_rates: Map<String, Value>,
}

impl FinancialSnapshot {
    pub fn new(ticker: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: company_name.into(),
            ratios: Map::new(),
            growth_rates: Map::new(),
        }
    }

    /// Look up a ratio, coercing to f64. Missing keys, non-numeric values,
    /// and non-finite numbers all resolve to `None` rather than an error.
    pub fn ratio(&self, name: &str) -> Option<f64> {
        coerce(self.ratios.get(name))
    }

    /// Like [`Self::ratio`] but substitutes a neutral default when the value
    /// cannot be resolved. Used where a judgment must always be reached.
    pub fn ratio_or(&self, name: &str, default: f64) -> f64 {
        self.ratio(name).unwrap_or(default)
    }

    /// Look up a growth metric, same coercion rules as [`Self::ratio`].
    pub fn growth_rate(&self, name: &str) -> Option<f64> {
        coerce(self.growth_rates.get(name))
    }

    pub fn growth_rate_or(&self, name: &str, default: f64) -> f64 {
        self.growth_rate(name).unwrap_or(default)
    }

    pub fn set_ratio(&mut self, name: impl Into<String>, value: f64) {
        self.ratios.insert(name.into(), Value::from(value));
    }

    pub fn set_growth_rate(&mut self, name: impl Into<String>, value: f64) {
        self.growth_rates.insert(name.into(), Value::from(value));
    }
}

fn coerce(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|v| v.is_finite())
}

/// Risk level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk ratings across the five fixed assessment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub financial_health: RiskLevel,
    pub valuation: RiskLevel,
    pub growth: RiskLevel,
    pub liquidity: RiskLevel,
    pub profitability: RiskLevel,
}

impl RiskAssessment {
    /// Category labels, in display order.
    pub fn category_labels() -> [&'static str; 5] {
        [
            "Financial Health",
            "Valuation",
            "Growth",
            "Liquidity",
            "Profitability",
        ]
    }

    /// All (category, level) pairs in display order.
    pub fn entries(&self) -> [(&'static str, RiskLevel); 5] {
        [
            ("Financial Health", self.financial_health),
            ("Valuation", self.valuation),
            ("Growth", self.growth),
            ("Liquidity", self.liquidity),
            ("Profitability", self.profitability),
        ]
    }
}

/// Bear/base/bull price scenarios around the current price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRange {
    pub bear_case: f64,
    pub base_case: f64,
    pub bull_case: f64,
    /// Fixed downside label, percent
    pub bear_pct: i32,
    /// Fixed upside label, percent
    pub bull_pct: i32,
}

impl ValuationRange {
    /// Safe degenerate range used when no valid current price is available.
    pub fn degenerate() -> Self {
        Self {
            bear_case: 0.0,
            base_case: 0.0,
            bull_case: 0.0,
            bear_pct: -20,
            bull_pct: 25,
        }
    }
}

/// Headline metrics extracted for display. Absent inputs stay `None`;
/// the renderer decides how "not available" is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub current_price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
    pub roe: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
}

impl KeyMetrics {
    /// All (display name, value) pairs in display order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("Current Price", self.current_price),
            ("P/E Ratio", self.pe_ratio),
            ("Market Cap", self.market_cap),
            ("Revenue", self.revenue),
            ("Net Income", self.net_income),
            ("ROE", self.roe),
            ("Debt/Equity", self.debt_to_equity),
            ("Current Ratio", self.current_ratio),
        ]
    }
}

/// Complete one-page investment summary for a single company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub ticker: String,
    pub company_name: String,
    pub generated_at: DateTime<Utc>,
    /// Exactly 3 reasons to be optimistic.
    pub bull_case: Vec<String>,
    /// Exactly 3 reasons to be pessimistic.
    pub bear_case: Vec<String>,
    pub risks: RiskAssessment,
    /// Never empty: holds the success sentinel when nothing triggered.
    pub red_flags: Vec<String>,
    pub valuation: ValuationRange,
    pub key_metrics: KeyMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ratio_coerces_numbers_and_rejects_garbage() {
        let mut snapshot = FinancialSnapshot::new("TEST", "Test Corp");
        snapshot.ratios.insert("ROE".into(), json!(0.22));
        snapshot.ratios.insert("PE_Ratio".into(), json!(18));
        snapshot.ratios.insert("Current_Ratio".into(), json!("2.1"));
        snapshot.ratios.insert("Debt_to_Equity".into(), Value::Null);

        assert_eq!(snapshot.ratio("ROE"), Some(0.22));
        assert_eq!(snapshot.ratio("PE_Ratio"), Some(18.0));
        assert_eq!(snapshot.ratio("Current_Ratio"), None);
        assert_eq!(snapshot.ratio("Debt_to_Equity"), None);
        assert_eq!(snapshot.ratio("Gross_Margin"), None);
        assert_eq!(snapshot.ratio_or("Gross_Margin", 0.3), 0.3);
    }

    #[test]
    fn growth_rate_lookup_mirrors_ratio_lookup() {
        let mut snapshot = FinancialSnapshot::new("TEST", "Test Corp");
        snapshot.set_growth_rate("Total_Revenue_CAGR", 0.12);

        assert_eq!(snapshot.growth_rate("Total_Revenue_CAGR"), Some(0.12));
        assert_eq!(snapshot.growth_rate("EPS_CAGR"), None);
        assert_eq!(snapshot.growth_rate_or("EPS_CAGR", 0.05), 0.05);
    }

    #[test]
    fn snapshot_deserializes_with_missing_maps() {
        let snapshot: FinancialSnapshot =
            serde_json::from_value(json!({ "ticker": "AAPL" })).unwrap();
        assert_eq!(snapshot.ticker, "AAPL");
        assert!(snapshot.ratios.is_empty());
        assert!(snapshot.growth_rates.is_empty());
    }
}
