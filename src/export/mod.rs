//! Export module for the expense tracker
//!
//! Writes the current session's expenses to CSV on request.

pub mod csv;

pub use self::csv::{export_category_summary_csv, export_expenses_csv};
