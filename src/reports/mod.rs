//! Read-only aggregation queries over the expense collection

pub mod summary;
pub mod trend;

pub use summary::{category_percentage, category_total, monthly_total, total, SpendingSummary};
pub use trend::MonthlyTrend;
