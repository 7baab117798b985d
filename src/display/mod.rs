//! Display formatting for terminal output
//!
//! Renders the session's data as tables, cards and text charts. Everything
//! here takes already-computed values and returns strings.

pub mod chart;
pub mod expense;
pub mod format;
pub mod summary;

pub use chart::{format_category_bar_chart, format_distribution_chart};
pub use expense::{format_expense_short, format_expense_table};
pub use summary::{format_dashboard, format_goals, format_insights, format_welcome};
