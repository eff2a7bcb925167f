use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GBP: &str = r#"
one:
  currency: gbp
  holdings: [Cash, Bank]
  incomes: [Salary]
  expenses: [Rent]
  months:
    - year: 2024
      month: 1
      transactions:
        - { src: Salary, dst: Bank, val: 500000, note: pay }
        - { src: Bank, dst: Rent, val: 120000 }
    - year: 2024
      month: 2
      transactions:
        - { src: Bank, dst: Cash, val: 200000 }
"#;

fn fin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fin").unwrap();
    cmd.env("FIN_DATA_DIR", home.path().join("home"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_doc(home: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = home.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn view_prints_holdings_by_default() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "gbp.yaml", GBP);

    fin(&home)
        .args(["view", "--file"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(concat!(
            "     ---     Cash     Bank\n",
            "  2024-1     0.00  3800.00\n",
            "  2024-2  2000.00  1800.00\n",
            "\n",
        ));
}

#[test]
fn view_incomes_as_markdown() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "gbp.yaml", GBP);

    fin(&home)
        .args(["view", "--view", "incomes", "--format", "markdown", "--file"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(concat!(
            "|**month**|**Salary**|\n",
            "|---|---|\n",
            "|**2024- 1**|5000.00|\n",
            "|**2024- 2**|0.00|\n",
            "\n",
            "\n",
        ));
}

#[test]
fn view_rejects_unknown_view() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "gbp.yaml", GBP);

    fin(&home)
        .args(["view", "--view", "assets", "--file"])
        .arg(&doc)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown view"));
}

#[test]
fn view_reports_decode_failure() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "broken.yaml", "one:\n  currency: gbp\n");

    fin(&home)
        .args(["view", "--file"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decode error"))
        .stderr(predicate::str::contains("missing field"));
}

#[test]
fn page_has_all_sections() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "gbp.yaml", GBP);

    fin(&home)
        .args(["page", "--file"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# gbp\n"))
        .stdout(predicate::str::contains("#### _holdings_"))
        .stdout(predicate::str::contains("#### _expenses_"))
        .stdout(predicate::str::contains("#### _income_"));
}

#[test]
fn store_round_trip() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "gbp.yaml", GBP);

    fin(&home)
        .args(["store", "put", "--file"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored gbp"));

    fin(&home)
        .args(["store", "list"])
        .assert()
        .success()
        .stdout("gbp\n");

    fin(&home)
        .args(["store", "show", "gbp", "--view", "expenses", "--format", "csv"])
        .assert()
        .success()
        .stdout("month,Rent\n2024-1,1200.00\n2024-2,0.00\n\n");
}

#[test]
fn store_show_missing_currency_fails() {
    let home = TempDir::new().unwrap();

    fin(&home)
        .args(["store", "show", "eur"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ledger not found: eur"));
}

#[test]
fn init_writes_settings_used_as_defaults() {
    let home = TempDir::new().unwrap();
    let doc = write_doc(&home, "gbp.yaml", GBP);

    fin(&home).arg("init").assert().success();

    let settings_path = home.path().join("home").join("config.json");
    assert!(settings_path.exists());
    std::fs::write(
        &settings_path,
        r#"{"default_view": "expenses", "default_encoding": "csv"}"#,
    )
    .unwrap();

    fin(&home)
        .args(["view", "--file"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("month,Rent\n"));

    fin(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default view:   expenses"));
}
