use crate::{InsightError, Stock};
use async_trait::async_trait;

/// Trait for insight rules evaluated against a single stock.
///
/// Implementations only read the stock and must not depend on the order in
/// which other insights run. `InsufficientData` is the expected error for a
/// stock whose history cannot support the rule's window.
#[async_trait]
pub trait Insight: Send + Sync {
    /// Stable rule name used in verdict reports.
    fn name(&self) -> &str;

    async fn evaluate(&self, stock: &Stock) -> Result<bool, InsightError>;
}
