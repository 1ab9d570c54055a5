//! Application branding, feature flags, and theme presets.
//!
//! Single source of truth for naming and presentation constants so that the
//! renderer and binaries never hardcode their own copies.

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "ATLAS FINANCIAL INTELLIGENCE";
pub const APP_NAME_SHORT: &str = "Atlas Engine";
pub const APP_TAGLINE: &str = "Professional-Grade Financial Analysis & Valuation Engine";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DISCLAIMER: &str = "This tool is for educational purposes only. Not financial advice.";

/// Toggleable application features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    InvestmentSummary,
    ValidationEngine,
    QuantAnalysis,
    ForensicAccounting,
    PdfExport,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::InvestmentSummary => "investment_summary",
            Feature::ValidationEngine => "validation_engine",
            Feature::QuantAnalysis => "quant_analysis",
            Feature::ForensicAccounting => "forensic_accounting",
            Feature::PdfExport => "pdf_export",
        }
    }
}

/// Feature switchboard. Everything defaults to enabled; individual features
/// can be switched off with `ATLAS_DISABLE_FEATURES=a,b,c`.
#[derive(Debug, Clone, Default)]
pub struct FeatureFlags {
    disabled: Vec<String>,
}

impl FeatureFlags {
    pub fn from_env() -> Self {
        let disabled = std::env::var("ATLAS_DISABLE_FEATURES")
            .map(|raw| {
                raw.split(',')
                    .map(|f| f.trim().to_lowercase())
                    .filter(|f| !f.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self { disabled }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        !self.disabled.iter().any(|d| d == feature.as_str())
    }
}

/// Presentation theme preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

impl Theme {
    /// The default blue corporate preset.
    pub fn blue_corporate() -> Self {
        Self {
            name: "Blue Corporate".to_string(),
            primary: "#1e88e5".to_string(),
            secondary: "#ffd700".to_string(),
            background: "#0a0e27".to_string(),
            text: "#ffffff".to_string(),
        }
    }

    /// Look up a preset by key; unknown names fall back to the default.
    pub fn by_name(name: &str) -> Self {
        match name {
            "blue_corporate" => Self::blue_corporate(),
            _ => Self::blue_corporate(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::blue_corporate()
    }
}

/// Well-known output directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directories {
    pub logs: String,
    pub exports: String,
    pub cache: String,
}

impl Default for Directories {
    fn default() -> Self {
        Self {
            logs: "logs".to_string(),
            exports: "exports".to_string(),
            cache: ".cache".to_string(),
        }
    }
}

pub fn app_title() -> String {
    format!("{} v{}", APP_NAME, APP_VERSION)
}
