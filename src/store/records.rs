//! In-memory record store
//!
//! Holds the ordered list of expenses together with the user's goals. Records
//! are addressed by position; any mutation invalidates previously observed
//! positions.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseCategory, ExpenseRecord, Goals, Money};

/// Owner of the expense list and the goals for one session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ExpenseRecord>,
    goals: Goals,
}

impl RecordStore {
    /// Create an empty store with default goals
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given goals
    pub fn with_goals(goals: Goals) -> Self {
        Self {
            records: Vec::new(),
            goals,
        }
    }

    /// Append an expense
    ///
    /// Fails with a validation error, leaving the store untouched, when the
    /// amount is not strictly positive or would push the total past
    /// [`Money::MAX_TOTAL`].
    pub fn add(
        &mut self,
        category: ExpenseCategory,
        amount: Money,
        description: Option<String>,
        date: NaiveDate,
    ) -> TrackerResult<&ExpenseRecord> {
        if !amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Expense amount must be greater than zero, got {}",
                amount
            )));
        }

        let total: Money = self.records.iter().map(|r| r.amount).sum();
        if total
            .checked_add(amount)
            .map_or(true, |sum| sum > Money::MAX_TOTAL)
        {
            return Err(TrackerError::Validation(format!(
                "Expense amount {} is too large, total cannot exceed {}",
                amount,
                Money::MAX_TOTAL
            )));
        }

        self.records
            .push(ExpenseRecord::new(date, category, description, amount));
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Remove and return the record at `index`
    pub fn delete_at(&mut self, index: usize) -> TrackerResult<ExpenseRecord> {
        if index >= self.records.len() {
            return Err(TrackerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Remove every record. Clearing an empty store is a no-op.
    pub fn clear_all(&mut self) {
        self.records.clear();
    }

    /// Replace both goals at once
    pub fn set_goals(&mut self, goals: Goals) {
        self.goals = goals;
    }

    /// Stable ascending sort by date
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|r| r.date);
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn goals(&self) -> Goals {
        self.goals
    }

    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
