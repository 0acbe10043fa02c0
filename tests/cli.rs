//! End-to-end CLI tests
//!
//! Each test runs the binary against a fresh temporary data directory via
//! `LEDGERBOOK_DATA_DIR`.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledgerbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledgerbook").unwrap();
    cmd.env("LEDGERBOOK_DATA_DIR", data_dir.path());
    cmd
}

fn add_income(data_dir: &TempDir, title: &str, value: &str, category: &str) {
    ledgerbook(data_dir)
        .args(["transaction", "add", title, value, "--type", "income", "--category", category])
        .assert()
        .success();
}

fn write_csv(data_dir: &TempDir, contents: &str) -> PathBuf {
    let path = data_dir.path().join("import.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn add_and_list_transactions() {
    let data_dir = TempDir::new().unwrap();

    add_income(&data_dir, "Salary", "5000", "Job");

    ledgerbook(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("income"))
        .stdout(predicate::str::contains("$5000.00"));
}

#[test]
fn balance_reflects_income_and_outcome() {
    let data_dir = TempDir::new().unwrap();

    add_income(&data_dir, "Salary", "5000", "Job");
    ledgerbook(&data_dir)
        .args(["transaction", "add", "Rent", "1200", "--type", "outcome", "--category", "Housing"])
        .assert()
        .success();

    ledgerbook(&data_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:  $5000.00"))
        .stdout(predicate::str::contains("Outcome: $1200.00"))
        .stdout(predicate::str::contains("Total:   $3800.00"));
}

#[test]
fn outcome_exceeding_balance_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    add_income(&data_dir, "Salary", "100", "Job");

    ledgerbook(&data_dir)
        .args(["transaction", "add", "Rent", "500", "--type", "outcome", "--category", "Housing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));

    // Nothing was persisted for the rejected outcome.
    ledgerbook(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn invalid_transaction_type_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    ledgerbook(&data_dir)
        .args(["transaction", "add", "Wire", "100", "--type", "transfer", "--category", "Misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction type"));
}

#[test]
fn remove_transaction_by_id() {
    let data_dir = TempDir::new().unwrap();

    let output = ledgerbook(&data_dir)
        .args(["transaction", "add", "Salary", "5000", "--type", "income", "--category", "Job"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .unwrap()
        .trim()
        .to_string();

    ledgerbook(&data_dir)
        .args(["transaction", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed transaction: Salary"));

    ledgerbook(&data_dir)
        .args(["transaction", "remove", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn import_csv_and_delete_source() {
    let data_dir = TempDir::new().unwrap();
    let csv_path = write_csv(
        &data_dir,
        "title,type,value,category\n\
         Salary,income,5000,Job\n\
         Rent,outcome,1200,Housing\n\
         Groceries,outcome,300,Food\n",
    );

    ledgerbook(&data_dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 transaction(s)"));

    assert!(!csv_path.exists());

    ledgerbook(&data_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:   $3500.00"));
}

#[test]
fn import_missing_file_fails() {
    let data_dir = TempDir::new().unwrap();

    ledgerbook(&data_dir)
        .args(["import", "no-such-file.csv"])
        .assert()
        .failure();
}

#[test]
fn config_shows_data_paths() {
    let data_dir = TempDir::new().unwrap();

    ledgerbook(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions.json"))
        .stdout(predicate::str::contains("categories.json"));
}

#[test]
fn state_persists_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    add_income(&data_dir, "Salary", "5000", "Job");
    add_income(&data_dir, "Bonus", "500", "Job");

    ledgerbook(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Bonus"));
}
