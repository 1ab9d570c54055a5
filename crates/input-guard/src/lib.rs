//! Input screening for user-supplied strings.
//!
//! Everything that reaches the summary pipeline from the outside (ticker
//! symbols, file paths, free-form search text) passes through here first.
//! Detection is pattern-based and conservative: a hit rejects the input, it
//! never attempts to repair it.

use lazy_static::lazy_static;
use regex::Regex;
use summary_core::SummaryError;

lazy_static! {
    static ref SQL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(drop|delete|insert|update|select|union|exec)\b")
            .expect("valid sql pattern"),
        Regex::new(r"[;']").expect("valid sql pattern"),
        Regex::new(r"(?i)(-{2}|/\*|\*/|xp_)").expect("valid sql pattern"),
    ];
    static ref XSS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid xss pattern"),
        Regex::new(r"(?i)javascript:").expect("valid xss pattern"),
        Regex::new(r"(?i)on\w+\s*=").expect("valid xss pattern"),
    ];
    static ref PATH_TRAVERSAL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\.\./").expect("valid path pattern"),
        Regex::new(r"\.\.\\").expect("valid path pattern"),
    ];
}

/// Kind of threat detected in an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threat {
    SqlInjection,
    Xss,
    PathTraversal,
}

impl Threat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Threat::SqlInjection => "SQL injection pattern detected",
            Threat::Xss => "XSS pattern detected",
            Threat::PathTraversal => "Path traversal pattern detected",
        }
    }
}

impl std::fmt::Display for Threat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct SecurityValidator;

impl SecurityValidator {
    pub fn detect_sql_injection(input: &str) -> Option<Threat> {
        SQL_PATTERNS
            .iter()
            .any(|p| p.is_match(input))
            .then_some(Threat::SqlInjection)
    }

    pub fn detect_xss(input: &str) -> Option<Threat> {
        XSS_PATTERNS
            .iter()
            .any(|p| p.is_match(input))
            .then_some(Threat::Xss)
    }

    pub fn detect_path_traversal(input: &str) -> Option<Threat> {
        PATH_TRAVERSAL_PATTERNS
            .iter()
            .any(|p| p.is_match(input))
            .then_some(Threat::PathTraversal)
    }

    /// Run every detector. The first hit is logged and returned.
    pub fn validate_input(input: &str) -> Result<(), Threat> {
        if input.is_empty() {
            return Ok(());
        }
        let threat = Self::detect_sql_injection(input)
            .or_else(|| Self::detect_xss(input))
            .or_else(|| Self::detect_path_traversal(input));
        match threat {
            Some(threat) => {
                tracing::warn!(%threat, input_len = input.len(), "rejected unsafe input");
                Err(threat)
            }
            None => Ok(()),
        }
    }

    /// Strip NULs and control characters (tabs and newlines survive), then
    /// optionally reduce to `[A-Za-z0-9 -_.]` and trim.
    pub fn sanitize_string(input: &str, alphanumeric_only: bool) -> String {
        let cleaned: String = input
            .chars()
            .filter(|&c| c != '\0')
            .filter(|&c| c as u32 >= 32 || c == '\t' || c == '\n' || c == '\r')
            .filter(|&c| {
                !alphanumeric_only
                    || c.is_ascii_alphanumeric()
                    || c.is_whitespace()
                    || matches!(c, '-' | '_' | '.')
            })
            .collect();
        cleaned.trim().to_string()
    }
}

/// Normalize and validate a ticker symbol: uppercase, 1-10 characters from
/// `[A-Z0-9.-]`. Anything else is rejected before it reaches the pipeline.
pub fn validate_ticker(raw: &str) -> Result<String, SummaryError> {
    SecurityValidator::validate_input(raw)
        .map_err(|threat| SummaryError::InvalidInput(threat.as_str().to_string()))?;

    let ticker = SecurityValidator::sanitize_string(raw, true).to_uppercase();
    if ticker.is_empty() || ticker.len() > 10 {
        return Err(SummaryError::InvalidInput(format!(
            "ticker must be 1-10 characters, got {:?}",
            raw
        )));
    }
    if !ticker
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err(SummaryError::InvalidInput(format!(
            "ticker contains unsupported characters: {:?}",
            raw
        )));
    }
    Ok(ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_sql_injection_keywords_and_quotes() {
        assert_eq!(
            SecurityValidator::detect_sql_injection("AAPL; DROP TABLE users"),
            Some(Threat::SqlInjection)
        );
        assert_eq!(
            SecurityValidator::detect_sql_injection("robert'); --"),
            Some(Threat::SqlInjection)
        );
        assert_eq!(SecurityValidator::detect_sql_injection("BRK.B"), None);
    }

    #[test]
    fn detects_xss_payloads() {
        assert_eq!(
            SecurityValidator::detect_xss("<script>alert(1)</script>"),
            Some(Threat::Xss)
        );
        assert_eq!(
            SecurityValidator::detect_xss("javascript:void(0)"),
            Some(Threat::Xss)
        );
        assert_eq!(
            SecurityValidator::detect_xss("<img onerror=pwn()>"),
            Some(Threat::Xss)
        );
        assert_eq!(SecurityValidator::detect_xss("plain text"), None);
    }

    #[test]
    fn detects_path_traversal() {
        assert_eq!(
            SecurityValidator::detect_path_traversal("../../etc/passwd"),
            Some(Threat::PathTraversal)
        );
        assert_eq!(
            SecurityValidator::detect_path_traversal(r"..\windows\system32"),
            Some(Threat::PathTraversal)
        );
        assert_eq!(SecurityValidator::detect_path_traversal("data/snapshot.json"), None);
    }

    #[test]
    fn validate_input_accepts_empty_and_clean_strings() {
        assert!(SecurityValidator::validate_input("").is_ok());
        assert!(SecurityValidator::validate_input("Apple Inc 2024 filing").is_ok());
        assert!(SecurityValidator::validate_input("1' OR '1'='1").is_err());
    }

    #[test]
    fn sanitize_strips_controls_and_trims() {
        assert_eq!(
            SecurityValidator::sanitize_string("  AAPL\0\x07  ", false),
            "AAPL"
        );
        assert_eq!(
            SecurityValidator::sanitize_string("line1\nline2", false),
            "line1\nline2"
        );
        assert_eq!(
            SecurityValidator::sanitize_string("a<b>!c_d-e.f", true),
            "abc_d-e.f"
        );
    }

    #[test]
    fn ticker_validation_normalizes_case_and_rejects_junk() {
        assert_eq!(validate_ticker("aapl").unwrap(), "AAPL");
        assert_eq!(validate_ticker(" brk.b ").unwrap(), "BRK.B");
        assert!(validate_ticker("").is_err());
        assert!(validate_ticker("WAYTOOLONGTICKER").is_err());
        assert!(validate_ticker("AAPL'; --").is_err());
    }
}
