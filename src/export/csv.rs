//! CSV Export functionality
//!
//! Exports the expense list and the per-category summary to CSV. Amounts are
//! written as plain decimals with two places, without a currency symbol.

use serde::Serialize;
use std::io::Write;

use crate::error::TrackerResult;
use crate::models::ExpenseRecord;
use crate::reports::CategoryShare;

#[derive(Serialize)]
struct ExpenseCsvRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct CategoryCsvRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Percentage")]
    percentage: String,
}

/// Export expenses in the given order
pub fn export_expenses_csv<'r, W, I>(records: I, writer: W) -> TrackerResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'r ExpenseRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written = 0;

    for record in records {
        csv_writer.serialize(ExpenseCsvRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            category: record.category.name(),
            description: &record.description,
            amount: record.amount.format_with_symbol(""),
        })?;
        written += 1;
    }

    if written == 0 {
        csv_writer.write_record(["Date", "Category", "Description", "Amount"])?;
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Export the per-category summary
pub fn export_category_summary_csv<W: Write>(
    shares: &[CategoryShare],
    writer: W,
) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for share in shares {
        csv_writer.serialize(CategoryCsvRow {
            category: share.category.name(),
            amount: share.amount.format_with_symbol(""),
            percentage: format!("{:.2}", share.percentage),
        })?;
    }

    if shares.is_empty() {
        csv_writer.write_record(["Category", "Amount", "Percentage"])?;
    }

    csv_writer.flush()?;
    Ok(shares.len())
}
