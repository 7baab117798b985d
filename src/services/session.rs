//! Expense session service
//!
//! Wraps the record store for one user session. Every mutation recomputes the
//! insight before returning, so the insight never lags behind the records or
//! the goals.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::TrackerResult;
use crate::models::{ExpenseCategory, ExpenseRecord, Goals, Money};
use crate::reports::{aggregate, DashboardSummary, Insights};
use crate::store::RecordStore;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub category: ExpenseCategory,
    pub amount: Money,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// One user's expense tracking session
#[derive(Debug, Clone, Default)]
pub struct ExpenseSession {
    store: RecordStore,
    insights: Insights,
}

impl ExpenseSession {
    /// Start an empty session with default goals
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session with the given goals
    pub fn with_goals(goals: Goals) -> Self {
        let mut session = Self {
            store: RecordStore::with_goals(goals),
            insights: Insights::default(),
        };
        session.refresh_insights();
        session
    }

    /// Record a new expense
    pub fn add_expense(&mut self, input: NewExpense) -> TrackerResult<ExpenseRecord> {
        let record = match self
            .store
            .add(input.category, input.amount, input.description, input.date)
        {
            Ok(record) => record.clone(),
            Err(e) => {
                warn!(amount = %input.amount, "rejected expense");
                return Err(e);
            }
        };

        info!(
            category = %record.category,
            amount = %record.amount,
            date = %record.date,
            "expense added"
        );
        self.refresh_insights();
        Ok(record)
    }

    /// Delete the expense at `index` and return it
    pub fn delete_expense(&mut self, index: usize) -> TrackerResult<ExpenseRecord> {
        let removed = self.store.delete_at(index)?;
        info!(
            index,
            category = %removed.category,
            amount = %removed.amount,
            "expense deleted"
        );
        self.refresh_insights();
        Ok(removed)
    }

    /// Remove every expense
    pub fn clear_expenses(&mut self) {
        let cleared = self.store.len();
        self.store.clear_all();
        info!(cleared, "expenses cleared");
        self.refresh_insights();
    }

    /// Replace the goals
    pub fn update_goals(&mut self, goals: Goals) {
        self.store.set_goals(goals);
        info!(
            monthly_budget = %goals.monthly_budget,
            savings_target = %goals.savings_target,
            "goals updated"
        );
        self.refresh_insights();
    }

    /// Summary for the dashboard
    ///
    /// Like the dashboard it feeds, this leaves the stored records sorted by
    /// ascending date, which changes the positions used by
    /// [`delete_expense`](Self::delete_expense).
    pub fn summary(&mut self) -> DashboardSummary {
        self.store.sort_by_date();
        DashboardSummary::generate(self.store.records(), self.store.goals())
    }

    /// Records newest first, each with its position in the store
    pub fn records_newest_first(&self) -> Vec<(usize, &ExpenseRecord)> {
        aggregate::newest_first(self.store.records())
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        self.store.records()
    }

    pub fn goals(&self) -> Goals {
        self.store.goals()
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn refresh_insights(&mut self) {
        let records = self.store.records();
        self.insights = Insights::generate(
            aggregate::total(records),
            &self.store.goals(),
            &aggregate::category_totals(records),
        );
        debug!(messages = self.insights.messages().len(), "insights recomputed");
    }
}
