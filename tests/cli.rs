use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "ledgerbook";

fn ledger_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("LEDGERBOOK_DATA_DIR", dir.path());
    cmd.env_remove("LEDGERBOOK_LOG");
    cmd
}

fn add(dir: &TempDir, date: &str, kind: &str, category: &str, amount: &str) {
    ledger_command(dir)
        .args(["add", date, kind, category, amount])
        .assert()
        .success();
}

fn january_fixture(dir: &TempDir) {
    add(dir, "2026-01-05", "Income", "Salary", "1000");
    add(dir, "2026-01-10", "Expenses", "Rent", "400");
    ledger_command(dir)
        .args(["budget", "set", "2026-01", "Expenses", "Rent", "500"])
        .assert()
        .success();
}

#[test]
fn add_and_list_entry() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["add", "2026-01-10", "expenses", "Rent", "400", "--note", "January"])
        .assert()
        .success()
        .stdout(contains("Added entry").and(contains("$400.00")));

    ledger_command(&dir)
        .args(["list", "--month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("January")).and(contains("1 entries")));
}

#[test]
fn non_numeric_amount_is_refused() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["add", "2026-01-10", "Expenses", "Rent", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    ledger_command(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn sub_cent_amount_rounds_to_nearest_cent() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["add", "2026-01-07", "Expenses", "Rent", "10.999"])
        .assert()
        .success()
        .stdout(contains("$11.00"));
}

#[test]
fn unknown_kind_is_refused() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["add", "2026-01-10", "Gambling", "Dice", "5"])
        .assert()
        .failure();
}

#[test]
fn negative_amount_is_accepted() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["add", "2026-01-10", "Investments", "Stocks", "-250.50"])
        .assert()
        .success()
        .stdout(contains("-$250.50"));
}

#[test]
fn january_budget_report() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);

    ledger_command(&dir)
        .args(["report", "budget", "2026-01"])
        .assert()
        .success()
        .stdout(
            contains("$500.00")
                .and(contains("$400.00"))
                .and(contains("$100.00 under")),
        );

    ledger_command(&dir)
        .args(["report", "month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("January 2026").and(contains("$600.00")));
}

#[test]
fn month_without_entries_is_all_zero() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);

    ledger_command(&dir)
        .args(["report", "month", "2099-01"])
        .assert()
        .success()
        .stdout(contains("January 2099").and(contains("$0.00")).and(contains("$1000.00").not()));
}

#[test]
fn series_csv_export() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);
    add(&dir, "2026-02-01", "Expenses", "Rent", "410");
    let out = dir.path().join("series.csv");

    ledger_command(&dir)
        .args(["report", "series", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 2 months"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Month,Income,Expenses,Savings,Investments,Net"));
    assert!(csv.contains("2026-01,1000.00,400.00,0.00,0.00,600.00"));
    assert!(csv.contains("2026-02,0.00,410.00,0.00,0.00,-410.00"));
}

#[test]
fn top_categories_and_chart() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);
    add(&dir, "2026-01-12", "Expenses", "Groceries", "80");

    ledger_command(&dir)
        .args(["report", "top", "2026-01", "Expenses", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains(" 1. Rent").and(contains("Groceries").not()));

    ledger_command(&dir)
        .args(["report", "chart"])
        .assert()
        .success()
        .stdout(contains("Scale: 1000 | 750 | 500 | 250 | 0").and(contains("2026-01")));
}

#[test]
fn export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);
    let file = dir.path().join("entries.json");

    ledger_command(&dir)
        .arg("export")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Exported 2 entries"));

    ledger_command(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 2 entries"));

    ledger_command(&dir)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"));

    ledger_command(&dir)
        .args(["report", "month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("$600.00"));
}

#[test]
fn malformed_import_empties_ledger() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);
    let file = dir.path().join("broken.json");
    std::fs::write(&file, "{ not an array").unwrap();

    ledger_command(&dir)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Imported 0 entries"));

    ledger_command(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2026-01-05", "Income", "Salary", "1000");

    ledger_command(&dir).arg("clear").assert().failure();

    ledger_command(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Salary"));
}

#[test]
fn delete_unknown_entry_fails() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["delete", "ent-00000000"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn budget_show_lists_allocations() {
    let dir = TempDir::new().unwrap();
    january_fixture(&dir);

    ledger_command(&dir)
        .args(["budget", "show", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("$500.00")));
}

#[test]
fn categories_and_config() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Emergency Fund").and(contains("Real Estate")));

    ledger_command(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: $"));
}
