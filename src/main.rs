use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::Shell;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::display::format_goals;
use expense_tracker::models::{Goals, Money};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Terminal expense tracker with budget goals and spending insights",
    long_about = "Record daily expenses by category, set a monthly budget and a savings \
                  target, and see totals, category charts and budget insights. \
                  Expenses live only for the current session."
)]
struct Cli {
    /// Monthly budget for this session (overrides the settings file)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_BUDGET")]
    budget: Option<String>,

    /// Savings target for this session (overrides the settings file)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_SAVINGS")]
    savings: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an expense tracking session (default)
    Shell,

    /// Write a settings file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins, then --verbose, then warnings only
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("expense_tracker=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let goals = session_goals(&settings, cli.budget.as_deref(), cli.savings.as_deref())?;
            let mut shell = Shell::new(settings, goals);

            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut stdout = io::stdout().lock();
            shell.run(stdin.lock(), &mut stdout, interactive)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            print!("{}", indent(&format_goals(&settings.goals()?, &settings.currency_symbol)));
        }
    }

    Ok(())
}

/// Goals for a new session: settings values, with command-line overrides
fn session_goals(settings: &Settings, budget: Option<&str>, savings: Option<&str>) -> Result<Goals> {
    let defaults = settings.goals()?;
    let monthly_budget = match budget {
        Some(s) => Money::parse_with_symbol(s, &settings.currency_symbol)
            .with_context(|| format!("Invalid --budget value: {}", s))?,
        None => defaults.monthly_budget,
    };
    let savings_target = match savings {
        Some(s) => Money::parse_with_symbol(s, &settings.currency_symbol)
            .with_context(|| format!("Invalid --savings value: {}", s))?,
        None => defaults.savings_target,
    };
    Ok(Goals::new(monthly_budget, savings_target)?)
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {}\n", line)).collect()
}
