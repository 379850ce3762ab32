mod common;
use common::{income_body, init_db, init_db_with_data, ledger, request, setup_test_db};
use predicates::str::contains;

#[test]
fn test_init_creates_db() {
    let db_path = setup_test_db("init_creates_db");

    ledger()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_handle_add_and_get_all_data() {
    let db_path = setup_test_db("handle_add_get");
    init_db(&db_path);

    let resp = request(&db_path, &income_body("1", "A", 100.0, 50.0));
    assert_eq!(resp, serde_json::json!({"status": "success"}));

    let all = request(&db_path, r#"{"action":"getAllData"}"#);
    assert_eq!(all["status"], "success");
    assert_eq!(all["incomes"][0]["id"], "1");
    assert_eq!(all["incomes"][0]["total"]["operatorShare"].as_f64(), Some(50.0));
    assert_eq!(all["incomes"][0]["month"], "2025-03");
}

#[test]
fn test_handle_reads_stdin() {
    let db_path = setup_test_db("handle_stdin");
    init_db(&db_path);

    ledger()
        .args(["--db", &db_path, "handle"])
        .write_stdin(r#"{"action":"addAdmin","data":{"name":"Boss"}}"#)
        .assert()
        .success()
        .stdout(contains(r#"{"status":"success"}"#));

    let all = request(&db_path, r#"{"action":"getAllData"}"#);
    assert_eq!(all["admins"], serde_json::json!(["Boss"]));
}

#[test]
fn test_handle_unknown_action_exits_zero() {
    let db_path = setup_test_db("handle_unknown");
    init_db(&db_path);

    ledger()
        .args(["--db", &db_path, "handle", r#"{"action":"wipe"}"#])
        .assert()
        .success()
        .stdout(contains(r#""message":"Unknown action""#));
}

#[test]
fn test_handle_malformed_json() {
    let db_path = setup_test_db("handle_malformed");
    init_db(&db_path);

    let resp = request(&db_path, "{oops");
    assert_eq!(resp["status"], "error");
    assert!(resp["error"].is_string());
}

#[test]
fn test_delete_income_via_cli() {
    let db_path = setup_test_db("delete_income_cli");
    init_db_with_data(&db_path);

    let resp = request(&db_path, r#"{"action":"deleteIncome","data":{"id":"1"}}"#);
    assert_eq!(resp["status"], "success");

    let all = request(&db_path, r#"{"action":"getAllData"}"#);
    let incomes = all["incomes"].as_array().unwrap();
    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0]["id"], "2");
}

#[test]
fn test_list_sheet() {
    let db_path = setup_test_db("list_sheet");
    init_db_with_data(&db_path);

    ledger()
        .args(["--db", &db_path, "list", "Advances_Raw"])
        .assert()
        .success()
        .stdout(contains("operator"))
        .stdout(contains("advance"))
        .stdout(contains("Irina"));
}

#[test]
fn test_list_unknown_sheet_fails() {
    let db_path = setup_test_db("list_unknown");
    init_db(&db_path);

    ledger()
        .args(["--db", &db_path, "list", "Nope"])
        .assert()
        .failure()
        .stderr(contains("Nope"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    ledger()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Income_Raw"))
        .stdout(contains("init"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_data(&db_path);

    ledger()
        .args(["--db", &db_path, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Income_Raw"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_db_convert_legacy_without_legacy_sheets() {
    let db_path = setup_test_db("convert_legacy_empty");
    init_db(&db_path);

    ledger()
        .args(["--db", &db_path, "db", "--convert-legacy"])
        .assert()
        .success()
        .stdout(contains("no legacy sheets found"));
}
