//! Service layer for the expense tracker
//!
//! Business operations that sit between the command layer and the record
//! store.

pub mod session;

pub use session::{ExpenseSession, NewExpense};
