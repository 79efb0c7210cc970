use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// A spendlog invocation isolated from the real user config: HOME points at
/// the temp dir so no `~/.config/spendlog` leaks in.
fn spendlog(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("HOME", home);
    cmd
}

#[test]
fn add_then_view_shows_record_and_total() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");

    spendlog(tmp.path())
        .arg("add")
        .arg("12.50")
        .args(["--category", "food"])
        .args(["--description", "lunch"])
        .args(["--date", "2024-01-15"])
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: $12.50 Food"));

    spendlog(tmp.path())
        .arg("view")
        .args(["--month", "1", "--year", "2024"])
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("Total: $12.50"));
}

#[test]
fn view_filters_other_months_out() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");

    for (date, amount, desc) in [
        ("2024-01-10", "10.50", "jan one"),
        ("2024-02-05", "99.99", "feb"),
        ("2024-01-20", "20.25", "jan two"),
    ] {
        spendlog(tmp.path())
            .arg("add")
            .arg(amount)
            .args(["--category", "Bills", "--description", desc, "--date", date])
            .arg("--data-dir")
            .arg(&data)
            .assert()
            .success();
    }

    spendlog(tmp.path())
        .arg("view")
        .args(["--month", "1", "--year", "2024"])
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("jan one"))
        .stdout(predicate::str::contains("jan two"))
        .stdout(predicate::str::contains("feb").not())
        .stdout(predicate::str::contains("Total: $30.75"));
}

#[test]
fn unknown_category_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    spendlog(tmp.path())
        .arg("add")
        .arg("5.00")
        .args(["--category", "Groceries"])
        .arg("--data-dir")
        .arg(tmp.path().join("data"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Groceries"));
}

#[test]
fn negative_amount_is_rejected_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");

    spendlog(tmp.path())
        .arg("add")
        .arg("-5.00")
        .args(["--category", "Food"])
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!data.join("expenses.txt").exists());
}

#[test]
fn month_out_of_range_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    spendlog(tmp.path())
        .arg("view")
        .args(["--month", "13", "--year", "2024"])
        .arg("--data-dir")
        .arg(tmp.path().join("data"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month: 13"));
}

#[test]
fn view_on_missing_ledger_reports_zero() {
    let tmp = tempfile::tempdir().unwrap();

    spendlog(tmp.path())
        .arg("view")
        .args(["--month", "6", "--year", "2024"])
        .arg("--data-dir")
        .arg(tmp.path().join("data"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded"))
        .stdout(predicate::str::contains("Total: $0.00"));
}

#[test]
fn malformed_ledger_line_is_tolerated() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");

    spendlog(tmp.path())
        .arg("add")
        .arg("10.00")
        .args(["--category", "Food", "--date", "2024-03-01"])
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success();

    // Corrupt the ledger by hand with a 3-field line.
    let ledger = data.join("expenses.txt");
    let mut content = std::fs::read_to_string(&ledger).unwrap();
    content.push_str("2024-03-02 | Food | 5.00\n");
    std::fs::write(&ledger, content).unwrap();

    spendlog(tmp.path())
        .arg("view")
        .args(["--month", "3", "--year", "2024"])
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $10.00"))
        .stderr(predicate::str::contains("skipped 1 unparseable ledger line"));
}

#[test]
fn list_shows_everything_in_insertion_order() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");

    for (date, amount) in [("2024-01-10", "1.00"), ("2023-12-25", "2.00"), ("2024-02-01", "3.00")] {
        spendlog(tmp.path())
            .arg("add")
            .arg(amount)
            .args(["--category", "Others", "--date", date])
            .arg("--data-dir")
            .arg(&data)
            .assert()
            .success();
    }

    spendlog(tmp.path())
        .arg("list")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("All Expenses (3)"))
        .stdout(predicate::str::contains("Total: $6.00"));
}

#[test]
fn categories_lists_the_closed_set() {
    let tmp = tempfile::tempdir().unwrap();

    spendlog(tmp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Others"));
}

#[test]
fn init_with_flag_creates_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("ledger-home");

    spendlog(tmp.path())
        .arg("init")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized spendlog"));

    assert!(data.is_dir());
    assert!(tmp
        .path()
        .join(".config")
        .join("spendlog")
        .join("settings.json")
        .exists());
}
