//! Dashboard summary
//!
//! Snapshot of every derived figure the dashboard shows, computed in one pass
//! from the current records and goals.

use super::aggregate::{self, CategoryShare, CategoryTotals};
use super::insight::Insights;
use crate::models::{ExpenseCategory, ExpenseRecord, Goals, Money};

/// All aggregates for one render of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Total amount spent
    pub total: Money,
    /// Number of recorded expenses
    pub count: usize,
    /// Mean expense, absent when nothing is recorded
    pub average: Option<Money>,
    /// Weekly figure (the running total)
    pub weekly: Money,
    /// Monthly figure (four times the weekly figure)
    pub monthly: Money,
    /// Spending per category
    pub category_totals: CategoryTotals,
    /// Spending distribution per category
    pub category_shares: Vec<CategoryShare>,
    /// Largest category and its total
    pub top_category: Option<(ExpenseCategory, Money)>,
    /// Goals in effect
    pub goals: Goals,
    /// Insight messages for the current state
    pub insights: Insights,
}

impl DashboardSummary {
    /// Compute the summary from a record snapshot
    pub fn generate(records: &[ExpenseRecord], goals: Goals) -> Self {
        let total = aggregate::total(records);
        let category_totals = aggregate::category_totals(records);
        let insights = Insights::generate(total, &goals, &category_totals);

        Self {
            total,
            count: aggregate::count(records),
            average: aggregate::average(records),
            weekly: aggregate::weekly_projection(records),
            monthly: aggregate::monthly_projection(records),
            category_shares: aggregate::category_shares(&category_totals),
            top_category: aggregate::top_category(&category_totals),
            category_totals,
            goals,
            insights,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Budget left before the monthly budget is reached (negative when over)
    pub fn budget_remaining(&self) -> Money {
        self.goals.monthly_budget - self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_summary() {
        let summary = DashboardSummary::generate(&[], Goals::default());
        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
        assert_eq!(summary.weekly, Money::zero());
        assert_eq!(summary.monthly, Money::zero());
        assert_eq!(summary.average, None);
        assert_eq!(summary.top_category, None);
        assert_eq!(summary.insights, Insights::default());
    }

    #[test]
    fn test_summary_figures() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let records = vec![
            ExpenseRecord::new(date, ExpenseCategory::Food, None, Money::from_whole(500)),
            ExpenseRecord::new(date, ExpenseCategory::Rent, None, Money::from_whole(2000)),
            ExpenseRecord::new(date, ExpenseCategory::Food, None, Money::from_whole(300)),
        ];
        let summary = DashboardSummary::generate(&records, Goals::default());

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, Money::from_whole(2800));
        assert_eq!(summary.monthly, Money::from_whole(11_200));
        assert_eq!(summary.average, Some(Money::from_cents(93_333)));
        assert_eq!(
            summary.top_category,
            Some((ExpenseCategory::Rent, Money::from_whole(2000)))
        );
        assert_eq!(summary.budget_remaining(), Money::from_whole(7200));
        assert_eq!(summary.category_shares.len(), 2);
    }
}
