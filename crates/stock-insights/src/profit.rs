use async_trait::async_trait;
use insight_core::{Insight, InsightError, Stock};

/// Checks that earnings per share never declined across the trailing window
/// of history points.
pub struct ProfitConstancy {
    window: usize,
    name: String,
}

impl ProfitConstancy {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            name: format!("profit_constancy_{}y", window),
        }
    }

    pub fn five_years() -> Self {
        Self::new(5)
    }

    pub fn ten_years() -> Self {
        Self::new(10)
    }
}

#[async_trait]
impl Insight for ProfitConstancy {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, stock: &Stock) -> Result<bool, InsightError> {
        if stock.history.len() < self.window {
            return Err(InsightError::InsufficientData(format!(
                "{} has {} of {} required history points",
                stock.name,
                stock.history.len(),
                self.window
            )));
        }

        let tail = &stock.history[stock.history.len() - self.window..];
        Ok(tail.windows(2).all(|pair| pair[1].eps >= pair[0].eps))
    }
}
