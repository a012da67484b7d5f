use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single equity under evaluation. Immutable once ingested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub name: String,
    /// Business / sector descriptor
    pub sector: String,
    /// Current market state. Absent on malformed upstream records.
    #[serde(default)]
    pub state: Option<CurrentState>,
    /// Dated occurrences (dividend payouts, splits). Append-only.
    #[serde(default)]
    pub events: Vec<StockEvent>,
    /// Earnings time series, oldest first. Append-only.
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

/// Point-in-time market state of a stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentState {
    pub price: f64,
    pub price_earnings_ratio: f64,
    pub holders: Vec<Holder>,
}

/// A shareholder position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holder {
    pub name: String,
    pub ordinary_shares: f64,
    pub preferred_shares: f64,
    /// Reported total. Zero when the source only reports the split.
    #[serde(default)]
    pub total_shares: f64,
}

impl Holder {
    /// Total position, falling back to ordinary + preferred when the source
    /// did not report a total.
    pub fn total(&self) -> f64 {
        if self.total_shares > 0.0 {
            self.total_shares
        } else {
            self.ordinary_shares + self.preferred_shares
        }
    }
}

/// Type of dated stock event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Dividend,
    Split,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Dividend => "Dividend",
            EventKind::Split => "Split",
            EventKind::Other(s) => s,
        }
    }
}

/// A dated occurrence in a stock's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEvent {
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub kind: EventKind,
}

/// One period of the earnings time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Period label, e.g. "2023"
    pub period: String,
    /// Earnings per share for the period
    pub eps: f64,
}

/// Outcome of one insight applied to one stock.
///
/// `Indeterminate` marks a rule that could not evaluate (insufficient
/// history); it is distinct from `Fail` and never counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
    Indeterminate,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Fail => "Fail",
            Verdict::Indeterminate => "Indeterminate",
        }
    }
}

/// Named verdict of one insight on one stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightVerdict {
    /// Rule name as reported by the insight
    pub insight: String,
    pub verdict: Verdict,
    /// Failure or indeterminacy detail, when available
    #[serde(default)]
    pub detail: Option<String>,
}
