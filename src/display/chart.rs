//! Text charts for category spending
//!
//! Two views over the same aggregated data: absolute spending per category
//! and each category's share of the total.

use super::format::{format_bar, format_percentage, section_header};
use crate::reports::{CategoryShare, CategoryTotals};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 16;

/// Bar chart of the amount spent per category, with amount labels
pub fn format_category_bar_chart(totals: &CategoryTotals, symbol: &str) -> String {
    let mut output = section_header("Spending by Category");

    if totals.is_empty() {
        output.push_str("No spending to chart.\n");
        return output;
    }

    let max = totals
        .values()
        .map(|m| m.as_f64())
        .fold(0.0_f64, f64::max);

    for (category, amount) in totals {
        let label = format!("{} {}", category.icon(), category.name());
        output.push_str(&format!(
            "{:<width$} {} {}\n",
            label,
            format_bar(amount.as_f64(), max, BAR_WIDTH),
            amount.format_grouped(symbol),
            width = LABEL_WIDTH
        ));
    }

    output
}

/// Share of total spending per category
pub fn format_distribution_chart(shares: &[CategoryShare]) -> String {
    let mut output = section_header("Spending Distribution");

    if shares.is_empty() {
        output.push_str("No spending to chart.\n");
        return output;
    }

    for share in shares {
        let label = format!("{} {}", share.category.icon(), share.category.name());
        output.push_str(&format!(
            "{:<width$} {} {:>6}\n",
            label,
            format_bar(share.percentage, 100.0, BAR_WIDTH),
            format_percentage(share.percentage),
            width = LABEL_WIDTH
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use crate::reports::aggregate::category_shares;

    fn totals() -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        totals.insert(ExpenseCategory::Food, Money::from_whole(800));
        totals.insert(ExpenseCategory::Rent, Money::from_whole(2000));
        totals
    }

    #[test]
    fn test_bar_chart_labels_amounts() {
        let chart = format_category_bar_chart(&totals(), "₹");
        assert!(chart.starts_with("Spending by Category"));
        assert!(chart.contains("Food"));
        assert!(chart.contains("₹800.00"));
        assert!(chart.contains("₹2,000.00"));

        // The largest category gets a full bar
        let rent_line = chart.lines().find(|l| l.contains("Rent")).unwrap();
        assert_eq!(rent_line.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_distribution_chart() {
        let chart = format_distribution_chart(&category_shares(&totals()));
        assert!(chart.contains("28.6%"));
        assert!(chart.contains("71.4%"));
    }

    #[test]
    fn test_empty_charts() {
        assert!(format_category_bar_chart(&CategoryTotals::new(), "₹").contains("No spending"));
        assert!(format_distribution_chart(&[]).contains("No spending"));
    }
}
