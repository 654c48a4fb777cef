use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cotas(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cotas").unwrap();
    cmd.env("COTAS_DATA_DIR", dir.path()).env_remove("COTAS_LOG");
    cmd
}

fn add_shareholders(dir: &TempDir) {
    cotas(dir)
        .args(["shareholder", "add", "Ana", "111", "--shares", "10", "--value", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added shareholder: Ana (111)"));
    cotas(dir)
        .args(["shareholder", "add", "Bruno", "222", "--shares", "20", "--value", "1000"])
        .assert()
        .success();
}

fn add_costs(dir: &TempDir) {
    cotas(dir)
        .args(["cost", "add", "feed", "100", "--date", "2024-03-05", "-m", "Feed purchase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alimentação - Feed purchase"));
    cotas(dir)
        .args(["cost", "add", "veterinary", "200", "--date", "2024-03-20", "-m", "Vet visit"])
        .assert()
        .success();
    cotas(dir)
        .args(["cost", "add", "salt", "999", "--date", "2024-04-01"])
        .assert()
        .success();
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    cotas(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    let header = fs::read_to_string(dir.path().join("data").join("cotistas.csv")).unwrap();
    assert_eq!(header.trim_end(), "Name,TaxId,Shares,ValuePerShare");
    assert!(dir.path().join("data").join("custos.csv").exists());
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    cotas(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("cotistas.csv"))
        .stdout(predicate::str::contains("Currency symbol: R$"));
}

#[test]
fn shareholder_list_and_totals() {
    let dir = TempDir::new().unwrap();

    cotas(&dir)
        .args(["shareholder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shareholders found."));

    add_shareholders(&dir);

    cotas(&dir)
        .args(["shareholder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bruno"))
        .stdout(predicate::str::contains("R$ 30,000.00"));
}

#[test]
fn shareholder_update_and_remove() {
    let dir = TempDir::new().unwrap();
    add_shareholders(&dir);

    cotas(&dir)
        .args(["shareholder", "add", "Ana Maria", "111", "--shares", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated shareholder: Ana Maria"));

    cotas(&dir)
        .args(["shareholder", "remove", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));

    cotas(&dir)
        .args(["shareholder", "remove", "222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed shareholder"));

    let content = fs::read_to_string(dir.path().join("data").join("cotistas.csv")).unwrap();
    assert_eq!(
        content,
        "Name,TaxId,Shares,ValuePerShare\nAna Maria,111,15,0.00\n"
    );
}

#[test]
fn shareholder_add_rejects_missing_shares() {
    let dir = TempDir::new().unwrap();

    cotas(&dir)
        .args(["shareholder", "add", "Ana", "111", "--shares", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn shareholder_replace_from_file() {
    let dir = TempDir::new().unwrap();
    add_shareholders(&dir);

    let source = dir.path().join("novos.csv");
    fs::write(&source, "Name,TaxId,Shares,ValuePerShare\nCarla,333,5,200\n").unwrap();

    cotas(&dir)
        .args(["shareholder", "replace"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced roster with 1 shareholders"));

    cotas(&dir)
        .args(["shareholder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carla"))
        .stdout(predicate::str::contains("Ana").not());
}

#[test]
fn cost_add_rejects_unknown_center_and_zero() {
    let dir = TempDir::new().unwrap();

    cotas(&dir)
        .args(["cost", "add", "Gasolina", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown cost center"));

    cotas(&dir)
        .args(["cost", "add", "salt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn cost_list_filters() {
    let dir = TempDir::new().unwrap();
    add_costs(&dir);

    cotas(&dir)
        .args(["cost", "list", "--description", "FEED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feed purchase"))
        .stdout(predicate::str::contains("Vet visit").not());

    cotas(&dir)
        .args(["cost", "list", "--center", "Todos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"));

    cotas(&dir)
        .args(["cost", "list", "--date", "2024-03-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Veterinário"))
        .stdout(predicate::str::contains("1 entries"));
}

#[test]
fn cost_centers_lists_filter_options() {
    let dir = TempDir::new().unwrap();
    add_costs(&dir);

    cotas(&dir)
        .args(["cost", "centers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manutenção de Cercas"))
        .stdout(predicate::str::contains("Filter options:\n  Todos\n  Alimentação\n"));
}

#[test]
fn cost_remove_previews_without_yes() {
    let dir = TempDir::new().unwrap();
    add_costs(&dir);

    cotas(&dir)
        .args(["cost", "remove", "--center", "salt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));

    cotas(&dir)
        .args(["cost", "remove", "--center", "salt", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 cost entries."));

    cotas(&dir)
        .args(["cost", "remove", "--center", "salt", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));
}

#[test]
fn allocation_splits_by_shares() {
    let dir = TempDir::new().unwrap();
    add_shareholders(&dir);
    add_costs(&dir);

    cotas(&dir)
        .args(["allocation", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total costs:      R$ 300.00"))
        .stdout(predicate::str::contains("Value per share:  R$ 10.00"))
        .stdout(predicate::str::contains("R$ 100.00"))
        .stdout(predicate::str::contains("R$ 200.00"));
}

#[test]
fn allocation_without_shareholders_shows_notice() {
    let dir = TempDir::new().unwrap();
    add_costs(&dir);

    cotas(&dir)
        .args(["allocation", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total costs:      R$ 0.00"))
        .stdout(predicate::str::contains("No data for this period."));
}

#[test]
fn allocation_exports_csv() {
    let dir = TempDir::new().unwrap();
    add_shareholders(&dir);
    add_costs(&dir);
    let out = dir.path().join("rateio.csv");

    cotas(&dir)
        .args(["allocation", "--period", "2024-03", "--csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 lines"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Name,TaxId,Shares,Owed\nAna,111,10,100.00\nBruno,222,20,200.00\n"
    );
}

#[test]
fn allocation_rejects_bad_period() {
    let dir = TempDir::new().unwrap();

    cotas(&dir)
        .args(["allocation", "--period", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("cotistas.csv"), "Name,TaxId,Shares,ValuePerShare\nAna,111\n").unwrap();

    cotas(&dir)
        .args(["shareholder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shareholders found."));
}
