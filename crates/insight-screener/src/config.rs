use insight_core::InsightError;
use serde::{Deserialize, Serialize};

/// Deployment-constant screener configuration.
///
/// Built once at startup and never mutated afterwards; the registry derived
/// from it is shared read-only across all evaluation passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Upper acceptance bound for the P/E insight
    pub pe_max_ratio: f64,
    /// Calendar years the dividend constancy window spans
    pub dividend_window_years: u32,
    /// Final year of the dividend windows; current UTC year when unset
    pub dividend_anchor_year: Option<i32>,
    /// Trailing-period windows for the profit constancy insights
    pub profit_windows: Vec<usize>,
    pub enable_dividend_constancy: bool,
    pub enable_pe_bound: bool,
    pub enable_profit_constancy: bool,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            pe_max_ratio: 15.0,
            dividend_window_years: 5,
            dividend_anchor_year: None,
            profit_windows: vec![5, 10],
            enable_dividend_constancy: true,
            enable_pe_bound: true,
            enable_profit_constancy: true,
        }
    }
}

impl ScreenerConfig {
    pub fn validate(&self) -> Result<(), InsightError> {
        if self.enable_pe_bound && self.pe_max_ratio <= 0.0 {
            return Err(InsightError::InvalidConfig(format!(
                "P/E bound must be positive, got {}",
                self.pe_max_ratio
            )));
        }
        if self.enable_dividend_constancy && self.dividend_window_years == 0 {
            return Err(InsightError::InvalidConfig(
                "dividend window must cover at least one year".to_string(),
            ));
        }
        if self.enable_profit_constancy && self.profit_windows.iter().any(|w| *w < 2) {
            return Err(InsightError::InvalidConfig(
                "profit windows must cover at least two periods".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ScreenerConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_pe_bound() {
        let config = ScreenerConfig {
            pe_max_ratio: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InsightError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_degenerate_profit_window() {
        let config = ScreenerConfig {
            profit_windows: vec![5, 1],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InsightError::InvalidConfig(_))
        ));
    }

    #[test]
    fn disabled_insights_skip_their_checks() {
        let config = ScreenerConfig {
            pe_max_ratio: -1.0,
            enable_pe_bound: false,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: ScreenerConfig =
            serde_json::from_str(r#"{"pe_max_ratio": 22.5, "profit_windows": [5]}"#).unwrap();
        assert_eq!(config.pe_max_ratio, 22.5);
        assert_eq!(config.profit_windows, vec![5]);
        assert_eq!(config.dividend_window_years, 5);
    }
}
