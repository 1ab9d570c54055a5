//! Presentation layer for investment summaries.
//!
//! The judgment engine hands over raw numbers and sentences; this crate owns
//! how they are spelled: currency with thousands separators, compact
//! billions/millions, percent and ratio suffixes, and the one-page report in
//! plain text or standalone HTML.

mod format;
mod report;

pub use format::{
    format_compact_currency, format_currency, format_metric, format_percent, format_ratio,
};
pub use report::{render_html, render_text};
