use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn demo_input() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sales_data.json")
}

fn salesrank() -> Command {
    let mut cmd = Command::cargo_bin("salesrank").expect("binary exists");
    cmd.env_remove("RUST_LOG")
        .env_remove("SALESRANK__STRATEGIES__BONUS")
        .env_remove("SALESRANK__STRATEGIES__FLAT_RATE__RATE");
    cmd
}

fn first_bonus(stdout: &[u8]) -> serde_json::Value {
    let reports: serde_json::Value = serde_json::from_slice(stdout).expect("valid JSON");
    reports[0]["bonus"].clone()
}

#[test]
fn json_output_lists_sellers_by_profit() {
    let output = salesrank()
        .args(["analyze", "--input", "demos/sales_data.json", "--format", "json"])
        .output()
        .expect("run salesrank");
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let reports = reports.as_array().expect("array of reports");
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0]["seller_id"], "seller_2");
    assert_eq!(reports[0]["bonus"], 22.5);
    assert_eq!(reports[3]["seller_id"], "seller_4");
    assert_eq!(reports[3]["top_products"].as_array().map(Vec::len), Some(0));
}

#[test]
fn table_output_is_the_default() {
    salesrank()
        .args(["analyze", "--input", "demos/sales_data.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivan Ivanov"))
        .stdout(predicate::str::contains("22.50"));
}

#[test]
fn config_file_selects_flat_rate_bonus() {
    let config = write_temp("[strategies]\nbonus = \"flat_rate\"\n\n[strategies.flat_rate]\nrate = 0.5\n");

    let output = salesrank()
        .args(["analyze", "--input", "demos/sales_data.json", "--format", "json", "--config"])
        .arg(config.path())
        .output()
        .expect("run salesrank");
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(reports[0]["bonus"], 75.0);
    assert_eq!(reports[2]["bonus"], 10.0);
}

#[test]
fn environment_overrides_select_flat_rate_bonus() {
    let output = salesrank()
        .args(["analyze", "--format", "json", "--input"])
        .arg(demo_input())
        .env("SALESRANK__STRATEGIES__BONUS", "flat_rate")
        .env("SALESRANK__STRATEGIES__FLAT_RATE__RATE", "0.5")
        .output()
        .expect("run salesrank");
    assert!(output.status.success());

    assert_eq!(first_bonus(&output.stdout), 75.0);
}

#[test]
fn environment_overrides_win_over_config_file() {
    let config = write_temp("[strategies]\nbonus = \"flat_rate\"\n\n[strategies.flat_rate]\nrate = 0.5\n");

    let output = salesrank()
        .args(["analyze", "--format", "json", "--input"])
        .arg(demo_input())
        .arg("--config")
        .arg(config.path())
        .env("SALESRANK__STRATEGIES__FLAT_RATE__RATE", "0.1")
        .output()
        .expect("run salesrank");
    assert!(output.status.success());

    assert_eq!(first_bonus(&output.stdout), 15.0);
}

#[test]
fn dotenv_file_in_working_directory_is_honoured() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join(".env"),
        "SALESRANK__STRATEGIES__BONUS=flat_rate\nSALESRANK__STRATEGIES__FLAT_RATE__RATE=0.5\n",
    )
    .expect("write .env");

    let output = salesrank()
        .current_dir(dir.path())
        .args(["analyze", "--format", "json", "--input"])
        .arg(demo_input())
        .output()
        .expect("run salesrank");
    assert!(output.status.success());

    assert_eq!(first_bonus(&output.stdout), 75.0);
}

#[test]
fn empty_sellers_fails() {
    let input = write_temp(
        r#"{ "sellers": [], "products": [{ "sku": "SKU_001", "purchase_price": 1 }],
             "purchase_records": [{ "seller_id": "seller_1", "total_amount": 1, "items": [] }] }"#,
    );

    salesrank()
        .args(["analyze", "--input"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("sellers"));
}

#[test]
fn null_document_fails() {
    let input = write_temp("null");

    salesrank()
        .args(["analyze", "--input"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sales data was supplied"));
}

#[test]
fn missing_input_file_fails() {
    salesrank()
        .args(["analyze", "--input", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}
