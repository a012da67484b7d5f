use chrono::{DateTime, Datelike, Utc};
use insight_core::{EventKind, Holder, InsightError, InsightVerdict, Stock};
use serde::{Deserialize, Serialize};

use crate::config::ScreenerConfig;
use crate::engine::{EvaluationEngine, StockReport};
use crate::registry::InsightRegistry;

/// Calendar years covered by the dividend payout aggregate
const DIVIDEND_SUM_WINDOW_YEARS: i32 = 5;

/// Display-ready projection of a stock and its verdict set.
///
/// Built fresh on every pass and replaced wholesale when the input set
/// changes; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredStock {
    pub name: String,
    pub sector: String,
    pub price: Option<f64>,
    pub positive_insights: usize,
    pub total_insights: usize,
    /// Rendered as "<positive>/<total>"
    pub insights_score: String,
    /// Holder with the largest total position, if any are known
    pub main_holder: Option<String>,
    /// Dividend payouts summed over the trailing window
    pub dividends_last_5_years: f64,
    /// Raw verdict set for detail-view consumers
    pub verdicts: Vec<InsightVerdict>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenResult {
    pub scored: Vec<ScoredStock>,
    pub total_analyzed: usize,
    pub total_failed: usize,
    pub timestamp: DateTime<Utc>,
}

/// Post-sort result filters
#[derive(Debug, Clone, Default)]
pub struct ScreenFilters {
    /// Drop stocks below this many positive insights
    pub min_positive: usize,
    /// Keep at most this many results
    pub limit: Option<usize>,
}

/// Ranks a collection of stocks by their insight score.
pub struct Screener {
    engine: EvaluationEngine,
    filters: ScreenFilters,
    anchor_year: Option<i32>,
}

impl Screener {
    pub fn new(engine: EvaluationEngine) -> Self {
        Self {
            engine,
            filters: ScreenFilters::default(),
            anchor_year: None,
        }
    }

    /// Build registry, engine and screener from one configuration.
    pub fn from_config(config: &ScreenerConfig) -> Result<Self, InsightError> {
        let registry = InsightRegistry::from_config(config)?;
        Ok(Self::new(EvaluationEngine::new(registry)).with_anchor_year(config.dividend_anchor_year))
    }

    pub fn with_filters(mut self, filters: ScreenFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Pin the final year of the dividend aggregate window.
    pub fn with_anchor_year(mut self, year: Option<i32>) -> Self {
        self.anchor_year = year;
        self
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    /// Evaluate and rank a snapshot of stocks.
    ///
    /// Ranking is a stable sort by positive insights descending, so stocks
    /// with equal scores keep their input order. Malformed stocks are logged,
    /// counted and skipped; they never abort the pass.
    pub async fn screen(&self, stocks: &[Stock]) -> Result<ScreenResult, anyhow::Error> {
        let total_analyzed = stocks.len();
        tracing::info!(
            "Screening {} stocks against {} insights",
            total_analyzed,
            self.engine.registry().len()
        );

        let reports = self.engine.evaluate_batch(stocks).await;

        let mut scored = Vec::with_capacity(total_analyzed);
        let mut total_failed = 0usize;

        for (stock, report) in stocks.iter().zip(reports) {
            match report {
                Ok(report) => scored.push(self.project(stock, report)),
                Err(e) => {
                    total_failed += 1;
                    tracing::warn!("Skipping {}: {}", stock.name, e);
                }
            }
        }

        // Stable sort: equal scores keep input order.
        scored.sort_by(|a, b| b.positive_insights.cmp(&a.positive_insights));

        scored.retain(|s| s.positive_insights >= self.filters.min_positive);
        if let Some(limit) = self.filters.limit {
            scored.truncate(limit);
        }

        tracing::info!(
            "Screen complete: {} scored, {} failed",
            scored.len(),
            total_failed
        );

        Ok(ScreenResult {
            scored,
            total_analyzed,
            total_failed,
            timestamp: Utc::now(),
        })
    }

    fn project(&self, stock: &Stock, report: StockReport) -> ScoredStock {
        let state = stock.state.as_ref();
        let insights_score = report.score_label();

        ScoredStock {
            name: report.name,
            sector: stock.sector.clone(),
            price: state.map(|s| s.price),
            positive_insights: report.positive_count,
            total_insights: report.total,
            insights_score,
            main_holder: state.and_then(|s| main_holder(&s.holders)),
            dividends_last_5_years: self.dividends_in_window(stock),
            verdicts: report.verdicts,
        }
    }

    fn dividends_in_window(&self, stock: &Stock) -> f64 {
        let anchor = self.anchor_year.unwrap_or_else(|| Utc::now().year());
        let first = anchor - DIVIDEND_SUM_WINDOW_YEARS + 1;

        stock
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Dividend)
            .filter(|e| {
                let year = e.date.year();
                year >= first && year <= anchor
            })
            .map(|e| e.amount)
            .sum()
    }
}

/// Holder with the highest total position; earlier holders win ties.
fn main_holder(holders: &[Holder]) -> Option<String> {
    holders
        .iter()
        .fold(None::<&Holder>, |best, holder| match best {
            Some(current) if holder.total() > current.total() => Some(holder),
            Some(current) => Some(current),
            None => Some(holder),
        })
        .map(|h| h.name.clone())
}
