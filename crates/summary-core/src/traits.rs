use crate::{FinancialSnapshot, InvestmentSummary, SummaryError};
use async_trait::async_trait;

/// Trait for sources that can load a company's financial snapshot.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self, ticker: &str) -> Result<FinancialSnapshot, SummaryError>;
}

/// Trait for engines that turn a snapshot into a full investment summary.
///
/// Implementations must be pure over the snapshot: no caching, no interior
/// mutability, identical output for identical input.
pub trait SummaryGenerator: Send + Sync {
    fn generate(&self, snapshot: &FinancialSnapshot) -> InvestmentSummary;
}
