//! Core data models for the expense tracker
//!
//! Money amounts, expense categories, expense records and budget goals.

pub mod category;
pub mod expense;
pub mod goals;
pub mod money;

pub use category::{CategoryParseError, ExpenseCategory};
pub use expense::ExpenseRecord;
pub use goals::Goals;
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
