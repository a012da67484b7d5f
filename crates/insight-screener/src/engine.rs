use futures_util::future::join_all;
use insight_core::{InsightError, InsightVerdict, Stock, Verdict};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::registry::InsightRegistry;

/// Complete verdict set for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReport {
    /// Entity identity, the key for detail-view consumers
    pub name: String,
    /// One verdict per registered insight, in registry order
    pub verdicts: Vec<InsightVerdict>,
    pub positive_count: usize,
    pub total: usize,
}

impl StockReport {
    /// Score rendered exactly as "<positive>/<total>".
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.positive_count, self.total)
    }
}

/// Applies the registry to stocks, isolating per-insight failures.
#[derive(Clone)]
pub struct EvaluationEngine {
    registry: InsightRegistry,
}

impl EvaluationEngine {
    pub fn new(registry: InsightRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &InsightRegistry {
        &self.registry
    }

    /// Evaluate every registered insight against one stock.
    ///
    /// Insights run concurrently; the verdict set keeps registry order. A
    /// rule that cannot evaluate yields an indeterminate verdict and never
    /// aborts the rest. A stock with no current state is malformed and fails
    /// as a whole.
    pub async fn evaluate(&self, stock: &Stock) -> Result<StockReport, InsightError> {
        if stock.state.is_none() {
            return Err(InsightError::MalformedEntity(format!(
                "{} has no current state",
                stock.name
            )));
        }

        let outcomes = join_all(self.registry.iter().map(|insight| async move {
            (insight.name().to_string(), insight.evaluate(stock).await)
        }))
        .await;

        let verdicts: Vec<InsightVerdict> = outcomes
            .into_iter()
            .map(|(name, outcome)| match outcome {
                Ok(true) => InsightVerdict {
                    insight: name,
                    verdict: Verdict::Pass,
                    detail: None,
                },
                Ok(false) => InsightVerdict {
                    insight: name,
                    verdict: Verdict::Fail,
                    detail: None,
                },
                Err(InsightError::InsufficientData(reason)) => {
                    tracing::debug!("{}: {} indeterminate: {}", stock.name, name, reason);
                    InsightVerdict {
                        insight: name,
                        verdict: Verdict::Indeterminate,
                        detail: Some(reason),
                    }
                }
                Err(e) => {
                    tracing::warn!("{}: insight {} failed: {}", stock.name, name, e);
                    InsightVerdict {
                        insight: name,
                        verdict: Verdict::Indeterminate,
                        detail: Some(e.to_string()),
                    }
                }
            })
            .collect();

        let positive_count = verdicts.iter().filter(|v| v.verdict.is_pass()).count();
        let total = verdicts.len();

        Ok(StockReport {
            name: stock.name.clone(),
            verdicts,
            positive_count,
            total,
        })
    }

    /// Evaluate a batch of stocks concurrently.
    ///
    /// Results come back in input order. A malformed stock fails only its
    /// own slot; the batch always completes.
    pub async fn evaluate_batch(
        &self,
        stocks: &[Stock],
    ) -> Vec<Result<StockReport, InsightError>> {
        let mut tasks = JoinSet::new();

        for (index, stock) in stocks.iter().cloned().enumerate() {
            let engine = self.clone();
            tasks.spawn(async move { (index, engine.evaluate(&stock).await) });
        }

        let mut slots: Vec<Option<Result<StockReport, InsightError>>> =
            (0..stocks.len()).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => tracing::error!("Evaluation task failed: {}", e),
            }
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(InsightError::Unknown("evaluation task aborted".to_string()))
                })
            })
            .collect()
    }
}
