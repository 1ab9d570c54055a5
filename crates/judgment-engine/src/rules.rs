//! Declarative signal tables.
//!
//! Each rule inspects the snapshot and either fires with a formatted
//! sentence or stays silent. Table order is load-bearing: when more rules
//! fire than the output keeps, the earliest entries win.

use summary_core::FinancialSnapshot;

/// A single threshold rule over a snapshot.
pub(crate) struct SignalRule {
    /// Short identifier, used in trace output only.
    pub name: &'static str,
    pub evaluate: fn(&FinancialSnapshot) -> Option<String>,
}

/// Positive signals, strongest evidence first. Absent or non-numeric
/// inputs skip the rule (no defaulting here).
pub(crate) const BULL_RULES: &[SignalRule] = &[
    SignalRule {
        name: "roe_strength",
        evaluate: |s| {
            let roe = s.ratio("ROE")?;
            (roe > 0.15).then(|| {
                format!(
                    "Strong profitability: ROE of {:.1}%, indicating efficient use of shareholder capital",
                    roe * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "gross_margin_strength",
        evaluate: |s| {
            let gross_margin = s.ratio("Gross_Margin")?;
            (gross_margin > 0.30).then(|| {
                format!(
                    "Healthy margins: Gross margin of {:.1}%, demonstrating pricing power",
                    gross_margin * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "operating_efficiency",
        evaluate: |s| {
            let op_margin = s.ratio("Operating_Margin")?;
            (op_margin > 0.15).then(|| {
                format!(
                    "Strong operating efficiency: Operating margin of {:.1}%",
                    op_margin * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "liquidity_strength",
        evaluate: |s| {
            let current_ratio = s.ratio("Current_Ratio")?;
            (current_ratio > 1.5).then(|| {
                format!(
                    "Solid liquidity: Current ratio of {:.2}x provides financial flexibility",
                    current_ratio
                )
            })
        },
    },
    SignalRule {
        name: "low_leverage",
        evaluate: |s| {
            let de_ratio = s.ratio("Debt_to_Equity")?;
            (de_ratio < 0.5).then(|| {
                format!(
                    "Conservative balance sheet: Debt/Equity of {:.2}x indicates low financial risk",
                    de_ratio
                )
            })
        },
    },
    SignalRule {
        name: "revenue_growth",
        evaluate: |s| {
            let rev_cagr = s.growth_rate("Total_Revenue_CAGR")?;
            (rev_cagr > 0.10).then(|| {
                format!(
                    "Consistent growth: Revenue CAGR of {:.1}% demonstrates market expansion",
                    rev_cagr * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "cash_generation",
        evaluate: |s| {
            let net_income = s.ratio("Net_Income")?;
            let ocf = s.ratio("Operating_Cash_Flow")?;
            (ocf > net_income && net_income > 0.0).then(|| {
                "Excellent cash generation: Operating cash flow exceeds net income".to_string()
            })
        },
    },
];

/// Generic filler statements used when fewer than 3 bull signals fire.
pub(crate) const BULL_FALLBACKS: &[&str] = &[
    "Established market position with brand recognition",
    "Diversified revenue streams reduce concentration risk",
    "Experienced management team with track record",
];

/// Negative signals, mirrored thresholds. Same skip-if-absent policy.
pub(crate) const BEAR_RULES: &[SignalRule] = &[
    SignalRule {
        name: "valuation_premium",
        evaluate: |s| {
            let pe_ratio = s.ratio("PE_Ratio")?;
            (pe_ratio > 30.0).then(|| {
                format!(
                    "Premium valuation: P/E ratio of {:.1}x may limit upside potential",
                    pe_ratio
                )
            })
        },
    },
    SignalRule {
        name: "leverage_risk",
        evaluate: |s| {
            let de_ratio = s.ratio("Debt_to_Equity")?;
            (de_ratio > 1.5).then(|| {
                format!(
                    "High leverage risk: Debt/Equity of {:.2}x increases financial vulnerability",
                    de_ratio
                )
            })
        },
    },
    SignalRule {
        name: "slowing_growth",
        evaluate: |s| {
            let rev_cagr = s.growth_rate("Total_Revenue_CAGR")?;
            if rev_cagr >= 0.03 {
                return None;
            }
            Some(if rev_cagr < 0.0 {
                format!(
                    "Revenue decline: {:.1}% CAGR signals market share loss",
                    rev_cagr * 100.0
                )
            } else {
                format!(
                    "Slowing growth: {:.1}% revenue CAGR suggests market maturation",
                    rev_cagr * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "thin_margins",
        evaluate: |s| {
            let op_margin = s.ratio("Operating_Margin")?;
            (op_margin < 0.05).then(|| {
                format!(
                    "Thin margins: Operating margin of {:.1}% leaves little room for error",
                    op_margin * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "liquidity_concern",
        evaluate: |s| {
            let current_ratio = s.ratio("Current_Ratio")?;
            (current_ratio < 1.0).then(|| {
                format!(
                    "Liquidity concerns: Current ratio of {:.2}x may strain operations",
                    current_ratio
                )
            })
        },
    },
    SignalRule {
        name: "weak_returns",
        evaluate: |s| {
            let roe = s.ratio("ROE")?;
            if roe >= 0.05 {
                return None;
            }
            Some(if roe < 0.0 {
                format!(
                    "Negative profitability: ROE of {:.1}% indicates losses",
                    roe * 100.0
                )
            } else {
                format!(
                    "Low returns: ROE of {:.1}% underperforms cost of equity",
                    roe * 100.0
                )
            })
        },
    },
];

pub(crate) const BEAR_FALLBACKS: &[&str] = &[
    "Competitive pressure may compress margins over time",
    "Macroeconomic sensitivity could impact near-term results",
    "Execution risk in strategic initiatives",
];

/// Hard warning conditions. Independent checks, no cap on how many fire.
pub(crate) const RED_FLAG_RULES: &[SignalRule] = &[
    SignalRule {
        name: "value_destruction",
        evaluate: |s| {
            let roe = s.ratio("ROE")?;
            (roe < 0.0).then(|| {
                format!(
                    "Negative return on equity ({:.1}%) - company is destroying shareholder value",
                    roe * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "bankruptcy_risk",
        evaluate: |s| {
            let de_ratio = s.ratio("Debt_to_Equity")?;
            (de_ratio > 2.0).then(|| {
                format!("High leverage ({:.2}x D/E) - elevated bankruptcy risk", de_ratio)
            })
        },
    },
    SignalRule {
        name: "liquidity_crisis",
        evaluate: |s| {
            let current_ratio = s.ratio("Current_Ratio")?;
            (current_ratio < 0.8).then(|| {
                format!(
                    "Liquidity crisis (Current Ratio: {:.2}x) - may struggle to meet obligations",
                    current_ratio
                )
            })
        },
    },
    SignalRule {
        name: "shrinking_business",
        evaluate: |s| {
            let rev_cagr = s.growth_rate("Total_Revenue_CAGR")?;
            (rev_cagr < -0.05).then(|| {
                format!(
                    "Significant revenue decline ({:.1}% CAGR) - business is shrinking",
                    rev_cagr * 100.0
                )
            })
        },
    },
    SignalRule {
        name: "extreme_valuation",
        evaluate: |s| {
            let pe_ratio = s.ratio("PE_Ratio")?;
            (pe_ratio > 100.0).then(|| {
                format!("Extreme valuation (P/E: {:.1}x) - priced for perfection", pe_ratio)
            })
        },
    },
];

/// Emitted as the sole entry when no red flag triggers.
pub(crate) const NO_RED_FLAGS: &str =
    "No major red flags detected - fundamentals appear healthy";
