use async_trait::async_trait;
use chrono::{Datelike, Utc};
use insight_core::{EventKind, Insight, InsightError, Stock};

/// Checks that a stock paid at least one dividend in every year of the
/// trailing window.
pub struct DividendConstancy {
    window_years: u32,
    anchor_year: Option<i32>,
}

impl DividendConstancy {
    pub fn new(window_years: u32) -> Self {
        Self {
            window_years,
            anchor_year: None,
        }
    }

    /// Pin the final year of the window for point-in-time evaluation.
    /// Without an anchor the window ends at the current UTC year.
    pub fn with_anchor_year(mut self, year: i32) -> Self {
        self.anchor_year = Some(year);
        self
    }

    fn anchor(&self) -> i32 {
        self.anchor_year.unwrap_or_else(|| Utc::now().year())
    }
}

impl Default for DividendConstancy {
    fn default() -> Self {
        Self::new(5)
    }
}

#[async_trait]
impl Insight for DividendConstancy {
    fn name(&self) -> &str {
        "dividend_constancy"
    }

    async fn evaluate(&self, stock: &Stock) -> Result<bool, InsightError> {
        let anchor = self.anchor();
        let first = anchor - self.window_years as i32 + 1;

        // Every calendar year in the window needs at least one payout.
        let constant = (first..=anchor).all(|year| {
            stock
                .events
                .iter()
                .any(|e| e.kind == EventKind::Dividend && e.date.year() == year)
        });

        Ok(constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use insight_core::StockEvent;

    fn dividend_on(year: i32) -> StockEvent {
        StockEvent {
            date: Utc.with_ymd_and_hms(year, 6, 15, 0, 0, 0).unwrap(),
            amount: 1.25,
            kind: EventKind::Dividend,
        }
    }

    fn create_test_stock(events: Vec<StockEvent>) -> Stock {
        Stock {
            name: "ACME".to_string(),
            sector: "Industrials".to_string(),
            state: None,
            events,
            history: vec![],
        }
    }

    #[tokio::test]
    async fn passes_with_a_dividend_every_year() {
        let stock = create_test_stock((2019..=2023).map(dividend_on).collect());
        let insight = DividendConstancy::new(5).with_anchor_year(2023);

        assert!(insight.evaluate(&stock).await.unwrap());
    }

    #[tokio::test]
    async fn fails_when_a_year_is_missing() {
        let events = [2019, 2020, 2022, 2023].into_iter().map(dividend_on).collect();
        let stock = create_test_stock(events);
        let insight = DividendConstancy::new(5).with_anchor_year(2023);

        assert!(!insight.evaluate(&stock).await.unwrap());
    }

    #[tokio::test]
    async fn two_payouts_in_one_year_do_not_cover_a_gap() {
        let mut events: Vec<StockEvent> =
            [2019, 2020, 2022, 2023].into_iter().map(dividend_on).collect();
        events.push(dividend_on(2022));
        let stock = create_test_stock(events);
        let insight = DividendConstancy::new(5).with_anchor_year(2023);

        assert!(!insight.evaluate(&stock).await.unwrap());
    }

    #[tokio::test]
    async fn non_dividend_events_are_ignored() {
        let mut events: Vec<StockEvent> = (2020..=2023).map(dividend_on).collect();
        events.push(StockEvent {
            date: Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap(),
            amount: 2.0,
            kind: EventKind::Split,
        });
        let stock = create_test_stock(events);
        let insight = DividendConstancy::new(5).with_anchor_year(2023);

        assert!(!insight.evaluate(&stock).await.unwrap());
    }

    #[tokio::test]
    async fn no_events_fails_cleanly() {
        let stock = create_test_stock(vec![]);
        let insight = DividendConstancy::default().with_anchor_year(2023);

        assert!(!insight.evaluate(&stock).await.unwrap());
    }
}
