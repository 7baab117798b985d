//! Reports module for the expense tracker
//!
//! Pure aggregation over the expense list, the rule-based insight generator,
//! and the dashboard summary that bundles both.

pub mod aggregate;
pub mod insight;
pub mod summary;

pub use aggregate::{CategoryShare, CategoryTotals};
pub use insight::{InsightMessage, Insights};
pub use summary::DashboardSummary;
