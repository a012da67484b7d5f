pub mod config;
pub mod engine;
pub mod registry;
pub mod screener;

pub use config::ScreenerConfig;
pub use engine::{EvaluationEngine, StockReport};
pub use registry::InsightRegistry;
pub use screener::{ScoredStock, ScreenFilters, ScreenResult, Screener};
