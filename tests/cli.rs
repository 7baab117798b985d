use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_CONFIG_DIR", config_dir.path())
        .env_remove("EXPENSE_TRACKER_BUDGET")
        .env_remove("EXPENSE_TRACKER_SAVINGS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn session_scenario_from_stdin() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin(
            "add Food 500 --date 2025-01-05\n\
             add Rent 2000 --date 2025-01-01 -d \"January rent\"\n\
             add Food 300 --date 2025-01-09\n\
             summary\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Added ₹500.00 to Food!"))
        .stdout(predicate::str::contains("₹2,800.00"))
        .stdout(predicate::str::contains("₹11,200.00"))
        .stdout(predicate::str::contains(
            "On Track: You have ₹7,200.00 remaining in your budget.",
        ))
        .stdout(predicate::str::contains(
            "Top Spending: Rent is your largest expense at ₹2,000.00",
        ))
        .stdout(predicate::str::contains("January rent"));
}

#[test]
fn empty_session_prompts_for_expenses() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("insights\nsummary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add your expense to get insights!"))
        .stdout(predicate::str::contains("Start Tracking Your Expenses"));
}

#[test]
fn budget_flag_changes_insight() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .args(["--budget", "1000"])
        .write_stdin("add Shopping 1200 --date 2025-02-01\ninsights\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeded your monthly budget"))
        .stdout(predicate::str::contains("remaining").not());
}

#[test]
fn bad_delete_is_reported_and_session_continues() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("add Bills 8500 --date 2025-03-01\ndelete 1\ninsights\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index out of range: 1"))
        .stdout(predicate::str::contains("approaching your monthly budget limit"));
}

#[test]
fn init_and_config_use_settings_file() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));
    assert!(dir.path().join("config.json").exists());

    tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: ₹"))
        .stdout(predicate::str::contains("Monthly budget: ₹10,000.00"));
}

#[test]
fn settings_file_sets_currency_symbol() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol":"$","monthly_budget":200000}"#,
    )
    .unwrap();

    tracker(&dir)
        .write_stdin("add Food 100 --date 2025-01-01\ninsights\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added $100.00 to Food!"))
        .stdout(predicate::str::contains("You have $1,900.00 remaining"));
}

#[test]
fn invalid_budget_flag_fails() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .args(["--budget", "lots"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --budget value"));
}
