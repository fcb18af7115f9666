use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "expense-tracker";

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.current_dir(dir.path())
        .env_remove("EXPENSE_TRACKER_DB")
        .env_remove("RUST_LOG");
    cmd
}

fn init(dir: &TempDir) {
    tracker(dir).arg("init").assert().success();
}

#[test]
fn init_creates_database_in_working_directory() {
    let dir = TempDir::new().expect("tempdir");
    tracker(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized at").and(contains("expenses.db")));
    assert!(dir.path().join("expenses.db").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().expect("tempdir");
    init(&dir);
    tracker(&dir)
        .args(["add", "--amount", "4.20", "--category", "coffee", "--date", "2024-03-01"])
        .assert()
        .success();
    init(&dir);
    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("coffee").and(contains("4.20")));
}

#[test]
fn commands_before_init_exit_with_two() {
    let dir = TempDir::new().expect("tempdir");
    tracker(&dir)
        .args(["add", "--amount", "1", "--category", "food", "--date", "2024-03-01"])
        .assert()
        .code(2)
        .stdout(contains("Error: database not found"));
    tracker(&dir)
        .arg("list")
        .assert()
        .code(2)
        .stdout(contains("Run: expense-tracker init"));
    tracker(&dir)
        .args(["summary", "--month", "2024-03"])
        .assert()
        .code(2);
    assert!(!dir.path().join("expenses.db").exists());
}

#[test]
fn add_then_list_and_summary() {
    let dir = TempDir::new().expect("tempdir");
    init(&dir);
    for (amount, category, date) in [
        ("10.00", "food", "2024-03-01"),
        ("5.50", "food", "2024-03-15"),
        ("2", "transport", "2024-03-02"),
    ] {
        tracker(&dir)
            .args(["add", "--amount", amount, "--category", category, "--date", date])
            .args(["--note", "test"])
            .assert()
            .success()
            .stdout(format!("Added: {amount} AUD {category} {date}\n"));
    }

    tracker(&dir)
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("transport").and(contains("food").not()));

    tracker(&dir)
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(
            contains("Summary for 2024-03:")
                .and(contains("15.50"))
                .and(contains("2.00"))
                .and(contains("17.50")),
        );
}

#[test]
fn add_rejects_invalid_input() {
    let dir = TempDir::new().expect("tempdir");
    init(&dir);
    tracker(&dir)
        .args(["add", "--amount", "abc", "--category", "food", "--date", "2024-03-01"])
        .assert()
        .code(2)
        .stdout(contains("--amount must be a number"));
    tracker(&dir)
        .args(["add", "--amount", "-5.00", "--category", "food", "--date", "2024-03-01"])
        .assert()
        .code(2)
        .stdout(contains("--amount must be > 0"));
    tracker(&dir)
        .args(["add", "--amount", "5", "--category", "food", "--date", "2024-02-30"])
        .assert()
        .code(2)
        .stdout(contains("--date must be a real date"));
    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("There are no expenses yet\n");
}

#[test]
fn summary_rejects_bad_month() {
    let dir = TempDir::new().expect("tempdir");
    init(&dir);
    tracker(&dir)
        .args(["summary", "--month", "2024-13"])
        .assert()
        .code(2)
        .stdout(contains("--month must be in YYYY-MM format"));
}

#[test]
fn summary_of_empty_month() {
    let dir = TempDir::new().expect("tempdir");
    init(&dir);
    tracker(&dir)
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout("No expenses for 2024-03\n");
}

#[test]
fn negative_limit_lists_nothing() {
    let dir = TempDir::new().expect("tempdir");
    init(&dir);
    tracker(&dir)
        .args(["add", "--amount", "1", "--category", "food", "--date", "2024-03-01"])
        .assert()
        .success();
    tracker(&dir)
        .args(["list", "--limit", "-1"])
        .assert()
        .success()
        .stdout("There are no expenses yet\n");
}

#[test]
fn db_path_from_flag_and_env() {
    let dir = TempDir::new().expect("tempdir");
    tracker(&dir)
        .args(["--db", "custom.db", "init"])
        .assert()
        .success()
        .stdout(contains("custom.db"));
    assert!(dir.path().join("custom.db").exists());

    tracker(&dir)
        .env("EXPENSE_TRACKER_DB", "custom.db")
        .arg("list")
        .assert()
        .success()
        .stdout("There are no expenses yet\n");
}

#[test]
fn unwritable_location_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    tracker(&dir)
        .args(["--db", "missing-dir/expenses.db", "init"])
        .assert()
        .code(1)
        .stderr(contains("storage unavailable"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    tracker(&dir).arg("export").assert().code(2);
}
