//! Rule-based spending insights
//!
//! Turns the current total, the goals and the per-category totals into at
//! most two short messages: one about the budget and one naming the biggest
//! spending category.

use std::fmt;

use super::aggregate::{top_category, CategoryTotals};
use crate::models::{ExpenseCategory, Goals, Money, DEFAULT_CURRENCY_SYMBOL};

/// A single insight line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightMessage {
    /// Nothing recorded yet
    AddExpensePrompt,
    /// Spending is above the monthly budget
    BudgetExceeded,
    /// Spending is above 80% of the budget but not over it
    ApproachingLimit,
    /// Spending is at or below 80% of the budget
    OnTrack { remaining: Money },
    /// Largest category by total spending
    TopSpending {
        category: ExpenseCategory,
        amount: Money,
    },
}

impl InsightMessage {
    /// Render the message using the given currency symbol
    pub fn render(&self, symbol: &str) -> String {
        match self {
            Self::AddExpensePrompt => "💡 Add your expense to get insights!".to_string(),
            Self::BudgetExceeded => {
                "🚨 Budget Alert: You've exceeded your monthly budget!".to_string()
            }
            Self::ApproachingLimit => {
                "⚠️ Budget Warning: You're approaching your monthly budget limit.".to_string()
            }
            Self::OnTrack { remaining } => format!(
                "✅ On Track: You have {} remaining in your budget.",
                remaining.format_grouped(symbol)
            ),
            Self::TopSpending { category, amount } => format!(
                "🎯 Top Spending: {} is your largest expense at {}",
                category,
                amount.format_grouped(symbol)
            ),
        }
    }
}

impl fmt::Display for InsightMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// Ordered set of insight messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    messages: Vec<InsightMessage>,
}

impl Insights {
    /// Build the insight messages for the current state
    ///
    /// Stored amounts are always positive, so an empty `totals` map means no
    /// expenses have been recorded.
    pub fn generate(total: Money, goals: &Goals, totals: &CategoryTotals) -> Self {
        if totals.is_empty() {
            return Self {
                messages: vec![InsightMessage::AddExpensePrompt],
            };
        }

        let budget = goals.monthly_budget;
        let mut messages = Vec::with_capacity(2);

        // 80% threshold compared in cents: total > budget * 0.8
        let status = if total > budget {
            InsightMessage::BudgetExceeded
        } else if i128::from(total.cents()) * 5 > i128::from(budget.cents()) * 4 {
            InsightMessage::ApproachingLimit
        } else {
            InsightMessage::OnTrack {
                remaining: budget - total,
            }
        };
        messages.push(status);

        if let Some((category, amount)) = top_category(totals) {
            messages.push(InsightMessage::TopSpending { category, amount });
        }

        Self { messages }
    }

    pub fn messages(&self) -> &[InsightMessage] {
        &self.messages
    }

    /// Render all messages separated by a blank line
    pub fn render(&self, symbol: &str) -> String {
        self.messages
            .iter()
            .map(|m| m.render(symbol))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Insights {
    fn default() -> Self {
        Self {
            messages: vec![InsightMessage::AddExpensePrompt],
        }
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY_SYMBOL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::aggregate::{category_totals, total};
    use crate::models::ExpenseRecord;
    use chrono::NaiveDate;

    fn records(items: &[(ExpenseCategory, i64)]) -> Vec<ExpenseRecord> {
        items
            .iter()
            .map(|(category, whole)| {
                ExpenseRecord::new(
                    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                    *category,
                    None,
                    Money::from_whole(*whole),
                )
            })
            .collect()
    }

    fn insights_for(items: &[(ExpenseCategory, i64)], goals: Goals) -> Insights {
        let records = records(items);
        Insights::generate(total(&records), &goals, &category_totals(&records))
    }

    #[test]
    fn test_empty_prompt() {
        let insights = insights_for(&[], Goals::default());
        assert_eq!(insights.messages(), &[InsightMessage::AddExpensePrompt]);
        assert_eq!(insights.render("₹"), "💡 Add your expense to get insights!");
        assert_eq!(insights, Insights::default());
    }

    #[test]
    fn test_on_track_with_top_category() {
        let insights = insights_for(
            &[
                (ExpenseCategory::Food, 500),
                (ExpenseCategory::Rent, 2000),
                (ExpenseCategory::Food, 300),
            ],
            Goals::default(),
        );

        assert_eq!(
            insights.messages(),
            &[
                InsightMessage::OnTrack {
                    remaining: Money::from_whole(7200)
                },
                InsightMessage::TopSpending {
                    category: ExpenseCategory::Rent,
                    amount: Money::from_whole(2000)
                },
            ]
        );
        assert_eq!(
            insights.render("₹"),
            "✅ On Track: You have ₹7,200.00 remaining in your budget.\n\n\
             🎯 Top Spending: Rent is your largest expense at ₹2,000.00"
        );
    }

    #[test]
    fn test_exceeded() {
        let insights = insights_for(&[(ExpenseCategory::Travel, 12_000)], Goals::default());
        assert_eq!(insights.messages()[0], InsightMessage::BudgetExceeded);
        assert!(!insights.render("₹").contains("remaining"));
    }

    #[test]
    fn test_approaching_limit() {
        let insights = insights_for(&[(ExpenseCategory::Bills, 8_500)], Goals::default());
        assert_eq!(insights.messages()[0], InsightMessage::ApproachingLimit);
    }

    #[test]
    fn test_threshold_boundaries() {
        // Exactly 80% is still on track
        let at_eighty = insights_for(&[(ExpenseCategory::Bills, 8_000)], Goals::default());
        assert_eq!(
            at_eighty.messages()[0],
            InsightMessage::OnTrack {
                remaining: Money::from_whole(2_000)
            }
        );

        // Exactly at the budget is a warning, not an alert
        let at_budget = insights_for(&[(ExpenseCategory::Bills, 10_000)], Goals::default());
        assert_eq!(at_budget.messages()[0], InsightMessage::ApproachingLimit);
    }

    #[test]
    fn test_uses_custom_budget() {
        let goals = Goals::new(Money::from_whole(1_000), Money::from_whole(100)).unwrap();
        let insights = insights_for(&[(ExpenseCategory::Food, 1_500)], goals);
        assert_eq!(insights.messages()[0], InsightMessage::BudgetExceeded);
    }
}
