//! Aggregates over the expense list
//!
//! Every function here is pure and works on a snapshot slice of records. The
//! whole collection is re-aggregated on each call; record counts are small.

use std::collections::BTreeMap;

use crate::models::{ExpenseCategory, ExpenseRecord, Money};

/// Sum of spending per category, ordered by category declaration order.
/// Only categories that actually occur are present.
pub type CategoryTotals = BTreeMap<ExpenseCategory, Money>;

/// One slice of the spending distribution
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Total amount spent; zero for an empty list
pub fn total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Number of records
pub fn count(records: &[ExpenseRecord]) -> usize {
    records.len()
}

/// Mean expense amount, or `None` when there are no records
pub fn average(records: &[ExpenseRecord]) -> Option<Money> {
    total(records).split_even(records.len())
}

/// Spending summed per category
pub fn category_totals(records: &[ExpenseRecord]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for record in records {
        *totals.entry(record.category).or_insert_with(Money::zero) += record.amount;
    }
    totals
}

/// Category with the largest total
///
/// Ties go to the category that comes first in declaration order
/// (Food, Rent, Travel, ...).
pub fn top_category(totals: &CategoryTotals) -> Option<(ExpenseCategory, Money)> {
    let mut top: Option<(ExpenseCategory, Money)> = None;
    for (&category, &amount) in totals {
        match top {
            Some((_, best)) if amount <= best => {}
            _ => top = Some((category, amount)),
        }
    }
    top
}

/// Weekly figure shown on the dashboard
///
/// This is the plain running total; no date window is applied.
pub fn weekly_projection(records: &[ExpenseRecord]) -> Money {
    total(records)
}

/// Monthly figure shown on the dashboard: four times the weekly figure
pub fn monthly_projection(records: &[ExpenseRecord]) -> Money {
    weekly_projection(records) * 4
}

/// Percentage of total spending per category, in category order
pub fn category_shares(totals: &CategoryTotals) -> Vec<CategoryShare> {
    let grand_total: Money = totals.values().sum();
    totals
        .iter()
        .map(|(&category, &amount)| {
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                (amount.cents() as f64 / grand_total.cents() as f64) * 100.0
            };
            CategoryShare {
                category,
                amount,
                percentage,
            }
        })
        .collect()
}

/// Records in ascending date order; same-day records keep their relative order
pub fn sorted_ascending(records: &[ExpenseRecord]) -> Vec<&ExpenseRecord> {
    let mut sorted: Vec<&ExpenseRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);
    sorted
}

/// Records in descending date order, each paired with its current position
/// in the list. Same-day records keep their relative order.
pub fn newest_first(records: &[ExpenseRecord]) -> Vec<(usize, &ExpenseRecord)> {
    let mut sorted: Vec<(usize, &ExpenseRecord)> = records.iter().enumerate().collect();
    sorted.sort_by(|a, b| b.1.date.cmp(&a.1.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: ExpenseCategory, whole: i64, day: u32, note: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            category,
            Some(note.to_string()),
            Money::from_whole(whole),
        )
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            record(ExpenseCategory::Food, 500, 10, "lunch"),
            record(ExpenseCategory::Rent, 2000, 1, "rent"),
            record(ExpenseCategory::Food, 300, 10, "dinner"),
        ]
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<ExpenseRecord> = Vec::new();
        assert_eq!(total(&records), Money::zero());
        assert_eq!(count(&records), 0);
        assert_eq!(average(&records), None);
        assert!(category_totals(&records).is_empty());
        assert_eq!(top_category(&category_totals(&records)), None);
        assert_eq!(weekly_projection(&records), Money::zero());
        assert_eq!(monthly_projection(&records), Money::zero());
    }

    #[test]
    fn test_totals_and_categories() {
        let records = sample();
        assert_eq!(total(&records), Money::from_whole(2800));
        assert_eq!(count(&records), 3);

        let totals = category_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&ExpenseCategory::Food], Money::from_whole(800));
        assert_eq!(totals[&ExpenseCategory::Rent], Money::from_whole(2000));
        assert_eq!(totals.values().sum::<Money>(), total(&records));

        assert_eq!(
            top_category(&totals),
            Some((ExpenseCategory::Rent, Money::from_whole(2000)))
        );
    }

    #[test]
    fn test_average_rounds_to_cents() {
        let records = vec![
            record(ExpenseCategory::Food, 10, 1, "a"),
            record(ExpenseCategory::Food, 10, 1, "b"),
            record(ExpenseCategory::Food, 5, 1, "c"),
        ];
        // 25.00 / 3 = 8.333...
        assert_eq!(average(&records), Some(Money::from_cents(833)));
    }

    #[test]
    fn test_top_category_tie_goes_to_first_declared() {
        let records = vec![
            record(ExpenseCategory::Shopping, 100, 1, "shoes"),
            record(ExpenseCategory::Travel, 100, 2, "train"),
        ];
        let totals = category_totals(&records);
        assert_eq!(
            top_category(&totals),
            Some((ExpenseCategory::Travel, Money::from_whole(100)))
        );
    }

    #[test]
    fn test_naive_projections() {
        let records = sample();
        assert_eq!(weekly_projection(&records), Money::from_whole(2800));
        assert_eq!(monthly_projection(&records), Money::from_whole(11_200));
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let shares = category_shares(&category_totals(&sample()));
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].category, ExpenseCategory::Food);
        assert!((shares[1].percentage - 2000.0 / 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_orderings_are_stable() {
        let records = sample();

        let ascending: Vec<&str> = sorted_ascending(&records)
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(ascending, vec!["rent", "lunch", "dinner"]);

        let descending: Vec<(usize, &str)> = newest_first(&records)
            .iter()
            .map(|(i, r)| (*i, r.description.as_str()))
            .collect();
        assert_eq!(descending, vec![(0, "lunch"), (2, "dinner"), (1, "rent")]);
    }
}
