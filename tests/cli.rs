use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const HEADER_ROW: &str = "\"Date\",\"Description\",\"Original Description\",\"Amount\",\"Transaction Type\",\"Category\",\"Account Name\",\"Labels\",\"Notes\"\n";

fn write_mint(dir: &Path, name: &str, rows: &[(&str, &str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(HEADER_ROW);
    for (amount, txn_type, category) in rows {
        content.push_str(&format!(
            "\"1/02/2023\",\"Payee\",\"PAYEE\",\"{amount}\",\"{txn_type}\",\"{category}\",\"Checking\",\"\",\"\"\n"
        ));
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Run with an isolated HOME so a real settings file never leaks in.
fn cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mint-convert").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_banktivity_profile() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Restaurants"), ("10.00", "credit", "Gas")]);
    let output = dir.path().join("out.csv");

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-p", "Banktivity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows converted"));

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Date,Description,Original Description,Amount,Category,Account Name,Labels,Notes"
    );
    assert_eq!(lines[1], "1/02/2023,Payee,PAYEE,-4.50,Restaurants,Checking,,");
    assert_eq!(lines[2], "1/02/2023,Payee,PAYEE,10.00,Gas,Checking,,");
}

#[test]
fn test_actions_with_category_remap() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Restaurants"), ("40.00", "debit", "Gas")]);
    let remap = dir.path().join("categories.csv");
    std::fs::write(&remap, "Restaurants,Dining\n").unwrap();
    let output = dir.path().join("out.csv");

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-a", "StripHeaders, ModifyDebitAmounts"])
        .arg("-c")
        .arg(&remap)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 categories remapped"));

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "1/02/2023,Payee,PAYEE,-4.50,debit,Dining,Checking,,");
    assert_eq!(lines[1], "1/02/2023,Payee,PAYEE,-40.00,debit,Gas,Checking,,");
}

#[test]
fn test_same_input_and_output_needs_force() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Gas")]);
    let before = std::fs::read(&input).unwrap();

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .args(["-p", "Banktivity"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Use -f to force conversion"));
    assert_eq!(std::fs::read(&input).unwrap(), before);

    cmd(dir.path())
        .args(["convert", "-f", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .args(["-p", "Banktivity"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&input).unwrap().contains("-4.50"));
}

#[test]
fn test_profile_and_actions_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Gas")]);

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["-p", "Banktivity", "-a", "StripHeaders"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not both"));

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No profile or actions specified"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_unsupported_action_and_profile() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Gas")]);

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["-a", "StripHeaders,Sparkle"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Sparkle"));

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["-p", "Quicken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Quicken"));
}

#[test]
fn test_directory_batch_skips_other_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("exports");
    std::fs::create_dir(&input).unwrap();
    write_mint(&input, "a.csv", &[("4.50", "debit", "Gas")]);
    write_mint(&input, "b.csv", &[("9.00", "credit", "Paycheck")]);
    std::fs::write(input.join("notes.txt"), "remember the milk").unwrap();
    let output = dir.path().join("converted");

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-a", "RemoveTransType"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s)"));

    assert!(output.join("a.csv").exists());
    assert!(output.join("b.csv").exists());
    assert!(!output.join("notes.txt").exists());
}

#[test]
fn test_atomic_batch_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("exports");
    std::fs::create_dir(&input).unwrap();
    write_mint(&input, "a.csv", &[("4.50", "debit", "Gas")]);
    std::fs::write(
        input.join("b.csv"),
        format!("{HEADER_ROW}\"1/02/2023\",\"Payee\",\"PAYEE\",\"1.00\",\"debit\",\"Gas\",\"Checking\",\"\"\n"),
    )
    .unwrap();
    let output = dir.path().join("converted");

    cmd(dir.path())
        .args(["convert", "--atomic", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-p", "Banktivity"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("row 2 has 8 columns"));
    assert!(!output.exists());
}

#[test]
fn test_missing_categories_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Gas")]);

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["-p", "Banktivity", "-c"])
        .arg(dir.path().join("nope.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_settings_supply_default_categories() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Restaurants")]);
    let remap = dir.path().join("categories.csv");
    std::fs::write(&remap, "Restaurants,Dining\n").unwrap();
    let config = dir.path().join(".config").join("mint-convert");
    std::fs::create_dir_all(&config).unwrap();
    std::fs::write(
        config.join("settings.json"),
        format!("{{\"categories_file\": {:?}}}", remap.to_str().unwrap()),
    )
    .unwrap();
    let output = dir.path().join("out.csv");

    cmd(dir.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-a", "StripHeaders"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&output).unwrap().contains("Dining"));
}

#[test]
fn test_validate_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Gas"), ("1.00", "debit", "Gas")]);

    cmd(dir.path())
        .args(["validate", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) valid"));

    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, format!("{HEADER_ROW}\"1/02/2023\"\n")).unwrap();
    cmd(dir.path())
        .args(["validate", "-i"])
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("row 2"));
}

#[test]
fn test_categories_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(
        dir.path(),
        "in.csv",
        &[("4.50", "debit", "Restaurants"), ("40.00", "debit", "Gas"), ("3.00", "debit", "Gas")],
    );

    cmd(dir.path())
        .args(["categories", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Gas\nRestaurants\n");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_mint(dir.path(), "in.csv", &[("4.50", "debit", "Gas")]);

    cmd(dir.path())
        .args(["convert", "-v", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["-a", "ModifyDebitAmounts"])
        .assert()
        .success()
        .stderr(predicate::str::contains("converting Mint CSV file"));
}
