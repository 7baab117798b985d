//! Dashboard display
//!
//! Summary cards, the insight block, and the welcome text shown before any
//! expense is recorded.

use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

use super::format::section_header;
use crate::models::Goals;
use crate::reports::{DashboardSummary, Insights};

/// Text shown while no expenses are recorded
pub fn format_welcome() -> String {
    "📝 Start Tracking Your Expenses\n\
     Use `add` to record your first expense and begin your financial journey!\n"
        .to_string()
}

/// The four summary cards as a single-row table
pub fn format_summary_cards(summary: &DashboardSummary, symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "💰 Total Amount",
        "📈 No. of Expenses",
        "📅 Weekly Total",
        "🗓️ Monthly Total",
    ]);
    builder.push_record([
        summary.total.format_grouped(symbol),
        summary.count.to_string(),
        summary.weekly.format_grouped(symbol),
        summary.monthly.format_grouped(symbol),
    ]);

    let mut table = builder.build();
    table.with(Style::rounded()).with(Alignment::center());
    format!("{}\n", table)
}

/// Insight block
pub fn format_insights(insights: &Insights, symbol: &str) -> String {
    format!("{}{}\n", section_header("🤖 Insights"), insights.render(symbol))
}

/// Current goals
pub fn format_goals(goals: &Goals, symbol: &str) -> String {
    format!(
        "Monthly budget: {}\nSavings target: {}\n",
        goals.monthly_budget.format_grouped(symbol),
        goals.savings_target.format_grouped(symbol)
    )
}

/// Full dashboard: cards, average, goals and insights
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    if summary.is_empty() {
        return format_welcome();
    }

    let mut output = section_header("📊 Expense Summary");
    output.push_str(&format_summary_cards(summary, symbol));

    if let Some(average) = summary.average {
        output.push_str(&format!(
            "Average expense: {}\n",
            average.format_grouped(symbol)
        ));
    }
    output.push_str(&format_goals(&summary.goals, symbol));
    output.push('\n');
    output.push_str(&format_insights(&summary.insights, symbol));

    output
}
