//! Shell command definitions
//!
//! Each line typed into the shell is split with shell quoting rules and parsed
//! by clap into a [`ShellCommand`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{TrackerError, TrackerResult};

/// A parsed shell line
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside the shell
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Record a new expense
    Add {
        /// Category (Food, Rent, Travel, Shopping, Bills, Entertainment, Healthcare, Other)
        category: String,
        /// Amount (e.g., "500" or "499.99")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Description, defaults to "<category> expense"
        #[arg(short, long)]
        description: Option<String>,
        /// Expense date, defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete the expense at the given position (the `#` column of `list`)
    #[command(alias = "rm")]
    Delete {
        /// Position of the expense
        index: usize,
    },

    /// Remove all expenses
    Clear,

    /// Show the goals, or replace both with new values
    Goals {
        /// New monthly budget
        #[arg(requires = "savings")]
        budget: Option<String>,
        /// New savings target
        savings: Option<String>,
    },

    /// Show the summary cards and insights
    #[command(alias = "dashboard")]
    Summary,

    /// List expenses, newest first
    #[command(alias = "ls")]
    List,

    /// Show the current insights
    Insights,

    /// Show spending charts by category
    Chart,

    /// Export expenses to a CSV file
    Export {
        /// Destination file
        path: PathBuf,
        /// Export the per-category summary instead of the expense list
        #[arg(long)]
        categories: bool,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Outcome of parsing one line of input
#[derive(Debug)]
pub enum ParsedLine {
    /// Nothing to do (blank line or comment)
    Empty,
    /// A command to run
    Command(ShellCommand),
    /// Help text or a usage error to show the user
    Message(String),
}

/// Parse one line of shell input
pub fn parse_line(line: &str) -> TrackerResult<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Empty);
    }

    let words = shell_words::split(trimmed)
        .map_err(|e| TrackerError::Validation(format!("Could not parse input: {}", e)))?;

    match ShellLine::try_parse_from(words) {
        Ok(parsed) => Ok(ParsedLine::Command(parsed.command)),
        Err(err) => Ok(ParsedLine::Message(err.render().to_string())),
    }
}
