pub mod dividend;
pub mod profit;
pub mod valuation;

pub use dividend::DividendConstancy;
pub use profit::ProfitConstancy;
pub use valuation::PriceEarningsBound;
