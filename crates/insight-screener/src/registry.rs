use std::sync::Arc;

use insight_core::{Insight, InsightError};
use stock_insights::{DividendConstancy, PriceEarningsBound, ProfitConstancy};

use crate::config::ScreenerConfig;

/// Ordered, fixed-at-construction set of active insights.
///
/// Shared read-only across entities and evaluation passes; cloning only
/// bumps reference counts.
#[derive(Clone)]
pub struct InsightRegistry {
    insights: Arc<[Arc<dyn Insight>]>,
}

impl InsightRegistry {
    pub fn from_insights(insights: Vec<Arc<dyn Insight>>) -> Self {
        Self {
            insights: insights.into(),
        }
    }

    /// Build the registry from configuration.
    ///
    /// Registration order is fixed: dividend constancy, P/E bound, then the
    /// profit constancy windows in their configured order.
    pub fn from_config(config: &ScreenerConfig) -> Result<Self, InsightError> {
        config.validate()?;

        let mut insights: Vec<Arc<dyn Insight>> = Vec::new();

        if config.enable_dividend_constancy {
            let mut rule = DividendConstancy::new(config.dividend_window_years);
            if let Some(year) = config.dividend_anchor_year {
                rule = rule.with_anchor_year(year);
            }
            insights.push(Arc::new(rule));
        }

        if config.enable_pe_bound {
            insights.push(Arc::new(PriceEarningsBound::new(config.pe_max_ratio)));
        }

        if config.enable_profit_constancy {
            for window in &config.profit_windows {
                insights.push(Arc::new(ProfitConstancy::new(*window)));
            }
        }

        tracing::debug!("Registry built with {} insights", insights.len());

        Ok(Self::from_insights(insights))
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    /// Insights in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Insight>> {
        self.insights.iter()
    }
}
