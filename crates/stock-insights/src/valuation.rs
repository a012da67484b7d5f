use async_trait::async_trait;
use insight_core::{Insight, InsightError, Stock};

/// Typical P/E ratios: <15 undervalued, 15-25 fair, >25 overvalued
const DEFAULT_MAX_RATIO: f64 = 15.0;

/// Checks that the price-to-earnings ratio sits inside the acceptable bound.
pub struct PriceEarningsBound {
    max_ratio: f64,
}

impl PriceEarningsBound {
    pub fn new(max_ratio: f64) -> Self {
        Self { max_ratio }
    }
}

impl Default for PriceEarningsBound {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RATIO)
    }
}

#[async_trait]
impl Insight for PriceEarningsBound {
    fn name(&self) -> &str {
        "price_earnings_bound"
    }

    async fn evaluate(&self, stock: &Stock) -> Result<bool, InsightError> {
        let state = stock.state.as_ref().ok_or_else(|| {
            InsightError::MalformedEntity(format!("{} has no current state", stock.name))
        })?;

        // Negative P/E means the company is loss-making.
        let pe = state.price_earnings_ratio;
        Ok(pe > 0.0 && pe <= self.max_ratio)
    }
}
