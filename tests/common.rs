#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ledger() -> Command {
    cargo_bin_cmd!("income-ledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_income_ledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    ledger()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Send one request through `handle` and parse the printed envelope.
pub fn request(db_path: &str, body: &str) -> Value {
    let output = ledger()
        .args(["--db", db_path, "handle", body])
        .output()
        .expect("run handle");
    assert!(output.status.success(), "handle exited with {:?}", output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .expect("handle printed nothing");
    serde_json::from_str(line).expect("handle output is JSON")
}

pub fn income_body(id: &str, operator: &str, gross: f64, share: f64) -> String {
    format!(
        r#"{{"action":"addIncome","data":{{"id":"{id}","date":"2025-03-14","operator":"{operator}","anketa":"Alice","shift":"day","sources":{{"onlyfans":{{"gross":{gross},"percent":50,"operatorShare":{share}}},"crypto":{{"gross":0,"percent":0,"operatorShare":0}},"paypal":{{"gross":0,"percent":0,"operatorShare":0}}}},"total":{{"gross":{gross},"operatorShare":{share}}}}}}}"#
    )
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (id, op) in [("1", "Irina"), ("2", "Olga")] {
        let resp = request(db_path, &income_body(id, op, 100.0, 50.0));
        assert_eq!(resp["status"], "success");
    }

    let resp = request(
        db_path,
        r#"{"action":"addPayment","data":{"id":"p1","date":"2025-03-20","operator":"Irina","type":"advance","amount":200}}"#,
    );
    assert_eq!(resp["status"], "success");

    let resp = request(
        db_path,
        r#"{"action":"addOperator","data":{"name":"Irina"}}"#,
    );
    assert_eq!(resp["status"], "success");
}
