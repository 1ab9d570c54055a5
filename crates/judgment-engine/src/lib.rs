//! Rule-based judgment engine for one-page investment summaries.
//!
//! Maps a company's financial ratios and growth metrics to qualitative
//! judgments: bull/bear narrative points, a five-category risk assessment,
//! red flags, a three-scenario valuation range, and a key-metrics
//! extraction. Deterministic decision tables throughout; every output is a
//! pure function of the snapshot, and no combination of missing or
//! malformed inputs can make a judgment call fail.

mod rules;

use chrono::Utc;
use rules::{
    SignalRule, BEAR_FALLBACKS, BEAR_RULES, BULL_FALLBACKS, BULL_RULES, NO_RED_FLAGS,
    RED_FLAG_RULES,
};
use summary_core::{
    FinancialSnapshot, InvestmentSummary, KeyMetrics, RiskAssessment, RiskLevel,
    SummaryGenerator, ValuationRange,
};

/// Stateless judgment engine over [`FinancialSnapshot`] records.
pub struct RatioJudgmentEngine;

impl RatioJudgmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate exactly 3 bull case points from positive financial signals.
    ///
    /// Rules fire in table order; if fewer than 3 fire, generic fallback
    /// statements fill the remaining slots.
    pub fn generate_bull_case(&self, snapshot: &FinancialSnapshot) -> Vec<String> {
        let points = fire_rules(BULL_RULES, snapshot);
        pad_to_three(points, BULL_FALLBACKS)
    }

    /// Generate exactly 3 bear case points from negative financial signals.
    pub fn generate_bear_case(&self, snapshot: &FinancialSnapshot) -> Vec<String> {
        let points = fire_rules(BEAR_RULES, snapshot);
        pad_to_three(points, BEAR_FALLBACKS)
    }

    /// Rate the five risk categories.
    ///
    /// Unlike the narrative generators, missing inputs here substitute
    /// neutral defaults so every category always reaches a verdict.
    pub fn assess_risks(&self, snapshot: &FinancialSnapshot) -> RiskAssessment {
        let current_ratio = snapshot.ratio_or("Current_Ratio", 1.0);
        let de_ratio = snapshot.ratio_or("Debt_to_Equity", 1.0);

        let financial_health = if current_ratio >= 1.5 && de_ratio <= 0.5 {
            RiskLevel::Low
        } else if current_ratio < 1.0 || de_ratio > 2.0 {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        };

        let pe_ratio = snapshot.ratio_or("PE_Ratio", 20.0);
        let valuation = if pe_ratio < 20.0 {
            RiskLevel::Low
        } else if pe_ratio > 40.0 {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        };

        let rev_cagr = snapshot.growth_rate_or("Total_Revenue_CAGR", 0.05);
        let growth = if rev_cagr > 0.10 {
            RiskLevel::Low
        } else if rev_cagr < 0.0 {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        };

        let liquidity = if current_ratio >= 2.0 {
            RiskLevel::Low
        } else if current_ratio < 1.0 {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        };

        let roe = snapshot.ratio_or("ROE", 0.10);
        let op_margin = snapshot.ratio_or("Operating_Margin", 0.10);
        let profitability = if roe > 0.15 && op_margin > 0.15 {
            RiskLevel::Low
        } else if roe < 0.0 || op_margin < 0.05 {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        };

        RiskAssessment {
            financial_health,
            valuation,
            growth,
            liquidity,
            profitability,
        }
    }

    /// Detect hard warning conditions. Returns every triggered warning, or a
    /// single success sentinel when the fundamentals look clean.
    pub fn detect_red_flags(&self, snapshot: &FinancialSnapshot) -> Vec<String> {
        let flags = fire_rules(RED_FLAG_RULES, snapshot);
        if flags.is_empty() {
            vec![NO_RED_FLAGS.to_string()]
        } else {
            flags
        }
    }

    /// Bear/base/bull price scenarios at fixed -20% / +25% around the
    /// current price. An absent or non-positive price yields the degenerate
    /// all-zero range rather than an error.
    pub fn valuation_range(&self, snapshot: &FinancialSnapshot) -> ValuationRange {
        match snapshot.ratio("Current_Price") {
            Some(price) if price > 0.0 => ValuationRange {
                bear_case: price * 0.80,
                base_case: price,
                bull_case: price * 1.25,
                bear_pct: -20,
                bull_pct: 25,
            },
            _ => ValuationRange::degenerate(),
        }
    }

    /// Extract the eight headline metrics. No defaulting: absent values stay
    /// absent and the renderer spells out "N/A".
    pub fn key_metrics(&self, snapshot: &FinancialSnapshot) -> KeyMetrics {
        KeyMetrics {
            current_price: snapshot.ratio("Current_Price"),
            pe_ratio: snapshot.ratio("PE_Ratio"),
            market_cap: snapshot.ratio("Market_Cap"),
            revenue: snapshot.ratio("Total_Revenue"),
            net_income: snapshot.ratio("Net_Income"),
            roe: snapshot.ratio("ROE"),
            debt_to_equity: snapshot.ratio("Debt_to_Equity"),
            current_ratio: snapshot.ratio("Current_Ratio"),
        }
    }

    /// Run every judgment and bundle the results into a one-page summary.
    pub fn generate_summary(&self, snapshot: &FinancialSnapshot) -> InvestmentSummary {
        let summary = InvestmentSummary {
            ticker: snapshot.ticker.clone(),
            company_name: snapshot.company_name.clone(),
            generated_at: Utc::now(),
            bull_case: self.generate_bull_case(snapshot),
            bear_case: self.generate_bear_case(snapshot),
            risks: self.assess_risks(snapshot),
            red_flags: self.detect_red_flags(snapshot),
            valuation: self.valuation_range(snapshot),
            key_metrics: self.key_metrics(snapshot),
        };
        tracing::debug!(
            ticker = %summary.ticker,
            red_flags = summary.red_flags.len(),
            "generated investment summary"
        );
        summary
    }
}

impl SummaryGenerator for RatioJudgmentEngine {
    fn generate(&self, snapshot: &FinancialSnapshot) -> InvestmentSummary {
        self.generate_summary(snapshot)
    }
}

impl Default for RatioJudgmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a rule table in order, collecting every fired message.
fn fire_rules(table: &[SignalRule], snapshot: &FinancialSnapshot) -> Vec<String> {
    table
        .iter()
        .filter_map(|rule| {
            let message = (rule.evaluate)(snapshot);
            if message.is_some() {
                tracing::trace!(rule = rule.name, ticker = %snapshot.ticker, "signal fired");
            }
            message
        })
        .collect()
}

/// Fill remaining slots from the fallback list in order, never duplicating
/// an entry, then cut to exactly 3.
fn pad_to_three(mut points: Vec<String>, fallbacks: &[&str]) -> Vec<String> {
    for fallback in fallbacks {
        if points.len() >= 3 {
            break;
        }
        if !points.iter().any(|p| p == fallback) {
            points.push((*fallback).to_string());
        }
    }
    points.truncate(3);
    points
}
