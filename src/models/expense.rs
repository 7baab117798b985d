//! Expense record model
//!
//! A single dated expense with a category, a description and a positive amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::money::Money;

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Category the expense is filed under
    pub category: ExpenseCategory,

    /// Free-form description
    pub description: String,

    /// Amount spent (always positive once stored)
    pub amount: Money,
}

impl ExpenseRecord {
    /// Create a record, defaulting a missing or blank description to
    /// `"<category> expense"`
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        description: Option<String>,
        amount: Money,
    ) -> Self {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| category.default_description());

        Self {
            date,
            category,
            description,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_description_defaults_from_category() {
        let record = ExpenseRecord::new(day(), ExpenseCategory::Travel, None, Money::from_whole(40));
        assert_eq!(record.description, "Travel expense");
    }

    #[test]
    fn test_blank_description_is_defaulted() {
        let record = ExpenseRecord::new(
            day(),
            ExpenseCategory::Bills,
            Some("   ".into()),
            Money::from_whole(40),
        );
        assert_eq!(record.description, "Bills expense");
    }

    #[test]
    fn test_explicit_description_kept() {
        let record = ExpenseRecord::new(
            day(),
            ExpenseCategory::Food,
            Some("Pizza night".into()),
            Money::from_whole(12),
        );
        assert_eq!(record.description, "Pizza night");
    }
}
