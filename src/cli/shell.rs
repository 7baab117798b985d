//! Interactive expense shell
//!
//! Reads commands line by line, applies them to one [`ExpenseSession`] and
//! writes the result. A failing command is reported and the loop continues;
//! only I/O failures on the output end the session.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::commands::{parse_line, ParsedLine, ShellCommand};
use crate::config::Settings;
use crate::display::{
    format_category_bar_chart, format_dashboard, format_distribution_chart,
    format_expense_short, format_expense_table, format_goals, format_insights, format_welcome,
};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_category_summary_csv, export_expenses_csv};
use crate::models::{ExpenseCategory, Goals, Money};
use crate::services::{ExpenseSession, NewExpense};

const PROMPT: &str = "expense> ";

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Line-oriented front end over an expense session
pub struct Shell {
    session: ExpenseSession,
    settings: Settings,
}

impl Shell {
    /// Create a shell with an empty session using the given goals
    pub fn new(settings: Settings, goals: Goals) -> Self {
        Self {
            session: ExpenseSession::with_goals(goals),
            settings,
        }
    }

    pub fn session(&self) -> &ExpenseSession {
        &self.session
    }

    /// Run until `quit` or end of input
    ///
    /// With `interactive` set, a banner and a prompt are printed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        interactive: bool,
    ) -> TrackerResult<()> {
        if interactive {
            writeln!(output, "💰 Expense Tracker")?;
            writeln!(output, "Type `help` for commands, `quit` to leave.\n")?;
            output.write_all(format_welcome().as_bytes())?;
            write!(output, "\n{}", PROMPT)?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            if self.execute_line(&line, output)? == LoopControl::Exit {
                break;
            }
            if interactive {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }
        }

        if interactive {
            writeln!(output)?;
        }
        Ok(())
    }

    /// Execute one line of input, reporting command errors to `output`
    pub fn execute_line<W: Write>(&mut self, line: &str, output: &mut W) -> TrackerResult<LoopControl> {
        let parsed = match parse_line(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                return Ok(LoopControl::Continue);
            }
        };

        match parsed {
            ParsedLine::Empty => Ok(LoopControl::Continue),
            ParsedLine::Message(text) => {
                output.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    writeln!(output)?;
                }
                Ok(LoopControl::Continue)
            }
            ParsedLine::Command(command) => {
                debug!(?command, "executing shell command");
                let mut buffer = String::new();
                let control = match self.execute(command, &mut buffer) {
                    Ok(control) => control,
                    Err(e) => {
                        warn!(error = %e, "command failed");
                        buffer.push_str(&format!("Error: {}\n", e));
                        LoopControl::Continue
                    }
                };
                output.write_all(buffer.as_bytes())?;
                output.flush()?;
                Ok(control)
            }
        }
    }

    fn execute(&mut self, command: ShellCommand, out: &mut String) -> TrackerResult<LoopControl> {
        match command {
            ShellCommand::Add {
                category,
                amount,
                description,
                date,
            } => self.handle_add(&category, &amount, description, date.as_deref(), out)?,
            ShellCommand::Delete { index } => self.handle_delete(index, out)?,
            ShellCommand::Clear => {
                self.session.clear_expenses();
                out.push_str("All expenses cleared!\n");
            }
            ShellCommand::Goals { budget, savings } => {
                self.handle_goals(budget.as_deref(), savings.as_deref(), out)?
            }
            ShellCommand::Summary => {
                let summary = self.session.summary();
                out.push_str(&format_dashboard(&summary, self.symbol()));
            }
            ShellCommand::List => {
                let rows = self.session.records_newest_first();
                out.push_str(&format_expense_table(
                    &rows,
                    &self.settings.currency_symbol,
                    &self.settings.date_format,
                ));
            }
            ShellCommand::Insights => {
                out.push_str(&format_insights(self.session.insights(), self.symbol()));
            }
            ShellCommand::Chart => {
                let summary = self.session.summary();
                out.push_str(&format_category_bar_chart(
                    &summary.category_totals,
                    self.symbol(),
                ));
                out.push('\n');
                out.push_str(&format_distribution_chart(&summary.category_shares));
            }
            ShellCommand::Export { path, categories } => {
                self.handle_export(&path, categories, out)?
            }
            ShellCommand::Quit => return Ok(LoopControl::Exit),
        }
        Ok(LoopControl::Continue)
    }

    fn handle_add(
        &mut self,
        category: &str,
        amount: &str,
        description: Option<String>,
        date: Option<&str>,
        out: &mut String,
    ) -> TrackerResult<()> {
        let category: ExpenseCategory = category
            .parse()
            .map_err(|e| TrackerError::Validation(format!("{}", e)))?;
        let amount = self.parse_amount(amount)?;
        let date = match date {
            Some(s) => self.parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };

        if !amount.is_positive() {
            out.push_str("⚠️ Please enter a valid amount\n");
            return Ok(());
        }

        let record = self.session.add_expense(NewExpense {
            category,
            amount,
            description,
            date,
        })?;
        out.push_str(&format!(
            "Added {} to {}!\n",
            record.amount.format_with_symbol(self.symbol()),
            record.category
        ));
        Ok(())
    }

    fn handle_delete(&mut self, index: usize, out: &mut String) -> TrackerResult<()> {
        if self.session.is_empty() {
            out.push_str("No expenses to delete\n");
            return Ok(());
        }

        let removed = self.session.delete_expense(index)?;
        out.push_str(&format!(
            "✅ Deleted: {}\n",
            format_expense_short(&removed, self.symbol())
        ));
        Ok(())
    }

    fn handle_goals(
        &mut self,
        budget: Option<&str>,
        savings: Option<&str>,
        out: &mut String,
    ) -> TrackerResult<()> {
        let (budget, savings) = match (budget, savings) {
            (Some(budget), Some(savings)) => (budget, savings),
            _ => {
                out.push_str(&format_goals(&self.session.goals(), self.symbol()));
                return Ok(());
            }
        };

        let budget = self.parse_amount(budget)?;
        let savings = self.parse_amount(savings)?;
        self.session.update_goals(Goals::new(budget, savings)?);
        out.push_str("Goals updated successfully!\n");
        Ok(())
    }

    fn handle_export(&mut self, path: &Path, categories: bool, out: &mut String) -> TrackerResult<()> {
        let file = File::create(path).map_err(|e| {
            TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let writer = BufWriter::new(file);

        let written = if categories {
            let summary = self.session.summary();
            export_category_summary_csv(&summary.category_shares, writer)?
        } else {
            let rows = self.session.records_newest_first();
            export_expenses_csv(rows.into_iter().map(|(_, record)| record), writer)?
        };

        out.push_str(&format!(
            "Exported {} rows to: {}\n",
            written,
            path.display()
        ));
        Ok(())
    }

    fn parse_amount(&self, s: &str) -> TrackerResult<Money> {
        Money::parse_with_symbol(s, self.symbol())
            .map_err(|e| TrackerError::Validation(e.to_string()))
    }

    fn parse_date(&self, s: &str) -> TrackerResult<NaiveDate> {
        NaiveDate::parse_from_str(s, &self.settings.date_format)
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .map_err(|_| {
                TrackerError::Validation(format!(
                    "Invalid date: {}. Use {} (e.g., 2025-01-31)",
                    s, self.settings.date_format
                ))
            })
    }

    fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}
