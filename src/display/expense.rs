//! Expense list display
//!
//! Renders the expense list as a table, newest first. The `#` column is the
//! record's position in the store, which is what `delete` expects.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::truncate;
use crate::models::ExpenseRecord;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the expense list as a table
pub fn format_expense_table(
    records: &[(usize, &ExpenseRecord)],
    symbol: &str,
    date_format: &str,
) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = records
        .iter()
        .map(|(index, record)| ExpenseRow {
            index: *index,
            date: record.date.format(date_format).to_string(),
            category: record.category.to_string(),
            description: truncate(&record.description, DESCRIPTION_WIDTH),
            amount: record.amount.format_grouped(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// One-line description of a record, used for add/delete feedback
pub fn format_expense_short(record: &ExpenseRecord, symbol: &str) -> String {
    format!(
        "{} - {}",
        record.category,
        record.amount.format_grouped(symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    fn record(day: u32, category: ExpenseCategory, whole: i64, note: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            category,
            Some(note.to_string()),
            Money::from_whole(whole),
        )
    }

    #[test]
    fn test_empty_table() {
        assert!(format_expense_table(&[], "₹", "%Y-%m-%d").contains("No expenses recorded"));
    }

    #[test]
    fn test_table_contents() {
        let rent = record(1, ExpenseCategory::Rent, 2000, "January rent");
        let food = record(15, ExpenseCategory::Food, 500, "Groceries");
        let rows = vec![(1, &food), (0, &rent)];

        let table = format_expense_table(&rows, "₹", "%Y-%m-%d");
        assert!(table.contains("Description"));
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("January rent"));
        assert!(table.contains("₹2,000.00"));

        // Newest row is rendered first
        let food_pos = table.find("Groceries").unwrap();
        let rent_pos = table.find("January rent").unwrap();
        assert!(food_pos < rent_pos);
    }

    #[test]
    fn test_custom_date_format() {
        let food = record(15, ExpenseCategory::Food, 500, "Groceries");
        let table = format_expense_table(&[(0, &food)], "$", "%d/%m/%Y");
        assert!(table.contains("15/01/2025"));
        assert!(table.contains("$500.00"));
    }

    #[test]
    fn test_format_expense_short() {
        let food = record(15, ExpenseCategory::Food, 500, "Groceries");
        assert_eq!(format_expense_short(&food, "₹"), "Food - ₹500.00");
    }
}
