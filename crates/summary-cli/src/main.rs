//! summary-cli: generate a one-page investment summary from a snapshot file.
//!
//! Usage:
//!   cargo run -p summary-cli -- --input snapshot.json
//!   cargo run -p summary-cli -- --input snapshot.json --ticker AAPL --json
//!   cargo run -p summary-cli -- --input snapshot.json --html > report.html

use anyhow::{bail, Context};
use async_trait::async_trait;
use input_guard::validate_ticker;
use judgment_engine::RatioJudgmentEngine;
use std::path::PathBuf;
use summary_config::Theme;
use summary_core::{FinancialSnapshot, SnapshotSource, SummaryError, SummaryGenerator};

/// Loads a snapshot from a local JSON file.
struct FileSnapshotSource {
    path: PathBuf,
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn load(&self, ticker: &str) -> Result<FinancialSnapshot, SummaryError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: FinancialSnapshot = serde_json::from_str(&raw)?;
        if !ticker.is_empty() && !snapshot.ticker.eq_ignore_ascii_case(ticker) {
            return Err(SummaryError::InvalidData(format!(
                "snapshot is for {}, not {}",
                snapshot.ticker, ticker
            )));
        }
        Ok(snapshot)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "summary_cli=info,judgment_engine=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let as_json = args.iter().any(|a| a == "--json");
    let as_html = args.iter().any(|a| a == "--html");
    let ticker = flag_value(&args, "--ticker");

    let Some(input) = flag_value(&args, "--input") else {
        eprintln!("usage: summary-cli --input <snapshot.json> [--ticker SYM] [--json | --html]");
        bail!("missing --input");
    };

    let requested = match &ticker {
        Some(t) => validate_ticker(t)?,
        None => String::new(),
    };

    let source = FileSnapshotSource {
        path: PathBuf::from(&input),
    };
    let mut snapshot = source
        .load(&requested)
        .await
        .with_context(|| format!("failed to load snapshot from {input}"))?;
    snapshot.ticker = validate_ticker(&snapshot.ticker)?;

    tracing::info!(ticker = %snapshot.ticker, "generating investment summary");
    let engine = RatioJudgmentEngine::new();
    let summary = engine.generate(&snapshot);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if as_html {
        let theme = Theme::by_name(&std::env::var("ATLAS_THEME").unwrap_or_default());
        println!("{}", summary_render::render_html(&summary, &theme));
    } else {
        print!("{}", summary_render::render_text(&summary));
    }

    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_json(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("summary-cli-test-{name}.json"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_snapshot_from_file() {
        let path = temp_json(
            "load",
            r#"{"ticker":"AAPL","company_name":"Apple Inc.","ratios":{"ROE":0.28}}"#,
        );
        let source = FileSnapshotSource { path };

        let snapshot = source.load("aapl").await.unwrap();
        assert_eq!(snapshot.ticker, "AAPL");
        assert_eq!(snapshot.ratio("ROE"), Some(0.28));
    }

    #[tokio::test]
    async fn rejects_ticker_mismatch() {
        let path = temp_json("mismatch", r#"{"ticker":"MSFT"}"#);
        let source = FileSnapshotSource { path };

        let err = source.load("AAPL").await.unwrap_err();
        assert!(matches!(err, SummaryError::InvalidData(_)));
    }

    #[tokio::test]
    async fn missing_file_maps_to_io_error() {
        let source = FileSnapshotSource {
            path: PathBuf::from("/nonexistent/snapshot.json"),
        };
        let err = source.load("AAPL").await.unwrap_err();
        assert!(matches!(err, SummaryError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_json_maps_to_serialization_error() {
        let path = temp_json("malformed", "{ not json");
        let source = FileSnapshotSource { path };

        let err = source.load("").await.unwrap_err();
        assert!(matches!(err, SummaryError::Serialization(_)));
    }

    #[test]
    fn flag_value_scans_pairs() {
        let args: Vec<String> = ["bin", "--input", "a.json", "--json"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(flag_value(&args, "--input").as_deref(), Some("a.json"));
        assert_eq!(flag_value(&args, "--ticker"), None);
    }
}
