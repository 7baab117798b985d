//! Expense Tracker - terminal personal-finance tracker
//!
//! Records dated expenses by category, tracks them against a monthly budget
//! and a savings target, and derives totals, per-category summaries and short
//! rule-based insights from the current list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, categories, expense records and goals
//! - `store`: The in-memory record store owned by a session
//! - `reports`: Pure aggregation, insights and the dashboard summary
//! - `services`: The expense session that ties store and insights together
//! - `display`: Tables, cards and text charts for the terminal
//! - `export`: CSV export
//! - `cli`: The interactive shell
//! - `config`: Config directory and user settings
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::models::{ExpenseCategory, Money};
//! use expense_tracker::services::{ExpenseSession, NewExpense};
//!
//! let mut session = ExpenseSession::new();
//! session.add_expense(NewExpense {
//!     category: ExpenseCategory::Rent,
//!     amount: Money::from_whole(2000),
//!     description: None,
//!     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//! })?;
//!
//! let summary = session.summary();
//! assert_eq!(summary.total, Money::from_whole(2000));
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{TrackerError, TrackerResult};
