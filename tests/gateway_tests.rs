use income_ledger::core::{Gateway, Status, UpdatePolicy};
use income_ledger::db::{MemorySheetStore, SheetStore, SqliteSheetStore};
use income_ledger::sheet::schema;
use serde_json::{Value, json};

fn gateway() -> Gateway<MemorySheetStore> {
    Gateway::new(MemorySheetStore::new(), UpdatePolicy::Reappend)
}

fn send<S: SheetStore>(gw: &mut Gateway<S>, body: Value) -> Value {
    let resp = gw.handle_body(&body.to_string());
    serde_json::from_str(&resp.to_json()).expect("response is JSON")
}

fn income(id: &str, operator: &str, gross: f64, share: f64) -> Value {
    json!({
        "id": id,
        "date": "2025-03-14",
        "operator": operator,
        "anketa": "Alice",
        "shift": "day",
        "sources": {
            "onlyfans": {"gross": gross, "percent": 50, "operatorShare": share},
            "crypto": {"gross": 0, "percent": 0, "operatorShare": 0},
            "paypal": {"gross": 0, "percent": 0, "operatorShare": 0}
        },
        "total": {"gross": gross, "operatorShare": share}
    })
}

fn incomes<S: SheetStore>(gw: &mut Gateway<S>) -> Vec<Value> {
    let resp = send(gw, json!({"action": "getAllData"}));
    assert_eq!(resp["status"], "success");
    resp["incomes"].as_array().cloned().unwrap_or_default()
}

#[test]
fn test_add_income_then_get_all_data() {
    let mut gw = gateway();

    let resp = send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 100.0, 50.0)}));
    assert_eq!(resp, json!({"status": "success"}));

    let list = incomes(&mut gw);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "1");
    assert_eq!(list[0]["total"]["operatorShare"].as_f64(), Some(50.0));
    assert_eq!(list[0]["sources"]["onlyfans"]["percent"].as_f64(), Some(50.0));
}

#[test]
fn test_first_append_writes_header() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 100.0, 50.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("2", "B", 10.0, 5.0)}));

    let rows = gw.store().read_rows(schema::INCOME.name).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], schema::INCOME.header_row());
    assert_eq!(rows[1].len(), 19);
}

#[test]
fn test_month_and_timestamp_are_derived() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));

    let list = incomes(&mut gw);
    assert_eq!(list[0]["month"], "2025-03");
    assert!(!list[0]["timestamp"].as_str().unwrap().is_empty());
}

#[test]
fn test_numeric_id_is_stored_as_text() {
    let mut gw = gateway();
    let mut data = income("x", "A", 1.0, 1.0);
    data["id"] = json!(1700000000000_i64);
    send(&mut gw, json!({"action": "addIncome", "data": data}));

    let list = incomes(&mut gw);
    assert_eq!(list[0]["id"], "1700000000000");

    let resp = send(&mut gw, json!({"action": "deleteIncome", "data": {"id": 1700000000000_i64}}));
    assert_eq!(resp["status"], "success");
    assert!(incomes(&mut gw).is_empty());
}

#[test]
fn test_delete_removes_last_duplicate_and_keeps_order() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "first", 1.0, 1.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("2", "middle", 2.0, 1.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "second", 3.0, 1.0)}));

    let resp = send(&mut gw, json!({"action": "deleteIncome", "data": {"id": "1"}}));
    assert_eq!(resp["status"], "success");

    let list = incomes(&mut gw);
    let operators: Vec<&str> = list.iter().map(|i| i["operator"].as_str().unwrap()).collect();
    assert_eq!(operators, ["first", "middle"]);
}

#[test]
fn test_delete_unknown_id_is_success_and_noop() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));

    let resp = send(&mut gw, json!({"action": "deleteIncome", "data": {"id": "42"}}));
    assert_eq!(resp, json!({"status": "success"}));
    assert_eq!(incomes(&mut gw).len(), 1);
}

#[test]
fn test_delete_on_missing_sheet_does_not_create_it() {
    let mut gw = gateway();
    let resp = send(&mut gw, json!({"action": "deletePenalty", "data": {"id": "1"}}));
    assert_eq!(resp["status"], "success");
    assert!(!gw.store().has_sheet(schema::PENALTIES.name).unwrap());
}

#[test]
fn test_update_reappends_at_the_end() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("2", "B", 2.0, 1.0)}));

    let resp = send(&mut gw, json!({"action": "updateIncome", "data": income("1", "A2", 9.0, 4.0)}));
    assert_eq!(resp["status"], "success");

    let list = incomes(&mut gw);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "2");
    assert_eq!(list[1]["id"], "1");
    assert_eq!(list[1]["operator"], "A2");
    assert_eq!(list[1]["total"]["gross"].as_f64(), Some(9.0));
}

#[test]
fn test_update_unknown_id_appends() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "updateIncome", "data": income("7", "A", 1.0, 1.0)}));

    let list = incomes(&mut gw);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "7");
}

#[test]
fn test_update_in_place_keeps_position() {
    let mut gw = Gateway::new(MemorySheetStore::new(), UpdatePolicy::InPlace);
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("2", "B", 2.0, 1.0)}));

    send(&mut gw, json!({"action": "updateIncome", "data": income("1", "A2", 9.0, 4.0)}));
    let list = incomes(&mut gw);
    assert_eq!(list[0]["id"], "1");
    assert_eq!(list[0]["operator"], "A2");
    assert_eq!(list[1]["id"], "2");

    // unknown id: nothing is written
    send(&mut gw, json!({"action": "updateIncome", "data": income("9", "Z", 1.0, 1.0)}));
    assert_eq!(incomes(&mut gw).len(), 2);
}

#[test]
fn test_payments_and_penalties_are_not_in_get_all_data() {
    let mut gw = gateway();
    let resp = send(
        &mut gw,
        json!({"action": "addPayment", "data": {"id": "p1", "date": "2025-03-20", "operator": "A", "type": "advance", "amount": "150"}}),
    );
    assert_eq!(resp["status"], "success");
    let resp = send(
        &mut gw,
        json!({"action": "addPenalty", "data": {"id": "f1", "date": "2025-03-21", "operator": "A", "amount": 20, "reason": "late"}}),
    );
    assert_eq!(resp["status"], "success");

    let all = send(&mut gw, json!({"action": "getAllData"}));
    assert!(all.get("payments").is_none());
    assert!(all.get("penalties").is_none());

    let payments = gw.store().read_rows(schema::PAYMENTS.name).unwrap();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[1][5], "advance");
    assert_eq!(payments[1][6].as_f64(), Some(150.0));
    assert_eq!(payments[1][2], "2025-03");

    send(&mut gw, json!({"action": "deletePayment", "data": {"id": "p1"}}));
    send(&mut gw, json!({"action": "deletePenalty", "data": {"id": "f1"}}));
    assert_eq!(gw.store().read_rows(schema::PAYMENTS.name).unwrap().len(), 1);
    assert_eq!(gw.store().read_rows(schema::PENALTIES.name).unwrap().len(), 1);
}

#[test]
fn test_unknown_payment_type_is_salary() {
    let mut gw = gateway();
    send(
        &mut gw,
        json!({"action": "addPayment", "data": {"id": "p1", "operator": "A", "type": "bonus", "amount": 1}}),
    );
    let rows = gw.store().read_rows(schema::PAYMENTS.name).unwrap();
    assert_eq!(rows[1][5], "salary");
}

#[test]
fn test_name_lists_fall_back_to_defaults() {
    let mut gw = gateway();
    let all = send(&mut gw, json!({"action": "getAllData"}));

    assert_eq!(all["incomes"], json!([]));
    assert_eq!(all["operators"], json!(schema::OPERATORS.defaults));
    assert_eq!(all["ankety"], json!(schema::ANKETY.defaults));
    assert_eq!(all["admins"], json!(schema::ADMINS.defaults));
    assert_eq!(all["skippedRows"], 0);

    // reading never creates sheets
    assert!(gw.store().sheet_names().unwrap().is_empty());
}

#[test]
fn test_add_name_is_deduplicated() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addOperator", "data": {"name": "Irina"}}));
    send(&mut gw, json!({"action": "addOperator", "data": {"name": "Irina"}}));
    send(&mut gw, json!({"action": "addOperator", "data": {"name": "Olga"}}));

    let all = send(&mut gw, json!({"action": "getAllData"}));
    assert_eq!(all["operators"], json!(["Irina", "Olga"]));
    assert_eq!(all["admins"], json!(schema::ADMINS.defaults));
}

#[test]
fn test_delete_last_name_restores_fallback() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addAdmin", "data": {"name": "Boss"}}));
    let all = send(&mut gw, json!({"action": "getAllData"}));
    assert_eq!(all["admins"], json!(["Boss"]));

    send(&mut gw, json!({"action": "deleteAdmin", "data": {"name": "Boss"}}));
    let all = send(&mut gw, json!({"action": "getAllData"}));
    assert_eq!(all["admins"], json!(schema::ADMINS.defaults));
}

#[test]
fn test_ankety_add_and_delete() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addAnketa", "data": {"name": "Alice"}}));
    send(&mut gw, json!({"action": "addAnketa", "data": {"name": "Bella"}}));
    send(&mut gw, json!({"action": "deleteAnketa", "data": {"name": "Alice"}}));

    let all = send(&mut gw, json!({"action": "getAllData"}));
    assert_eq!(all["ankety"], json!(["Bella"]));
}

#[test]
fn test_unknown_action_is_rejected_without_mutation() {
    let mut gw = gateway();
    let resp = send(&mut gw, json!({"action": "dropEverything", "data": {"id": "1"}}));
    assert_eq!(resp, json!({"status": "error", "message": "Unknown action"}));

    let resp = send(&mut gw, json!({"data": {}}));
    assert_eq!(resp["message"], "Unknown action");

    // action names are case-sensitive
    let resp = send(&mut gw, json!({"action": "GETALLDATA"}));
    assert_eq!(resp["status"], "error");

    assert!(gw.store().sheet_names().unwrap().is_empty());
    assert!(gw.store().log_entries().unwrap().is_empty());
}

#[test]
fn test_malformed_body_is_an_error_envelope() {
    let mut gw = gateway();
    let resp = gw.handle_body("{not json");
    assert_eq!(resp.status, Status::Error);
    assert!(resp.error.is_some());
    assert!(resp.message.is_none());
}

#[test]
fn test_invalid_amount_is_an_error_envelope() {
    let mut gw = gateway();
    let resp = send(
        &mut gw,
        json!({"action": "addPenalty", "data": {"id": "f1", "amount": "twenty"}}),
    );
    assert_eq!(resp["status"], "error");
    assert!(resp["error"].as_str().unwrap().contains("twenty"));
    assert!(!gw.store().has_sheet(schema::PENALTIES.name).unwrap());
}

#[test]
fn test_unreadable_income_row_is_skipped() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));
    gw.store_mut()
        .append_row(schema::INCOME.name, vec![json!("broken"), json!("2025-01-01")])
        .unwrap();
    send(&mut gw, json!({"action": "addIncome", "data": income("2", "B", 1.0, 1.0)}));

    let all = send(&mut gw, json!({"action": "getAllData"}));
    assert_eq!(all["incomes"].as_array().unwrap().len(), 2);
    assert_eq!(all["skippedRows"], 1);
}

#[test]
fn test_mutations_are_audited() {
    let mut gw = gateway();
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));
    send(&mut gw, json!({"action": "updateIncome", "data": income("1", "A", 2.0, 1.0)}));
    send(&mut gw, json!({"action": "deleteIncome", "data": {"id": "1"}}));

    let ops: Vec<String> = gw
        .store()
        .log_entries()
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, ["add", "edit", "del"]);
}

#[test]
fn test_sqlite_store_behaves_like_memory_store() {
    let store = SqliteSheetStore::open_in_memory().unwrap();
    let mut gw = Gateway::new(store, UpdatePolicy::Reappend);

    send(&mut gw, json!({"action": "addIncome", "data": income("1", "first", 1.0, 1.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("2", "middle", 2.0, 1.0)}));
    send(&mut gw, json!({"action": "addIncome", "data": income("1", "second", 3.0, 1.0)}));
    send(&mut gw, json!({"action": "deleteIncome", "data": {"id": "1"}}));
    send(&mut gw, json!({"action": "addOperator", "data": {"name": "Irina"}}));

    let all = send(&mut gw, json!({"action": "getAllData"}));
    let operators: Vec<&str> = all["incomes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["operator"].as_str().unwrap())
        .collect();
    assert_eq!(operators, ["first", "middle"]);
    assert_eq!(all["operators"], json!(["Irina"]));
    assert_eq!(
        gw.store().sheet_names().unwrap(),
        [schema::INCOME.name, schema::OPERATORS.name]
    );
}

#[test]
fn test_missing_data_is_an_error() {
    let mut gw = gateway();

    let resp = send(&mut gw, json!({"action": "addIncome"}));
    assert_eq!(resp["status"], "error");
    assert!(resp["error"].as_str().unwrap().contains("addIncome"));
    assert!(!gw.store().has_sheet(schema::INCOME.name).unwrap());

    send(&mut gw, json!({"action": "addIncome", "data": income("1", "A", 1.0, 1.0)}));
    let resp = send(&mut gw, json!({"action": "deleteIncome", "data": null}));
    assert_eq!(resp["status"], "error");
    assert_eq!(incomes(&mut gw).len(), 1);

    for action in ["addOperator", "deleteAdmin", "addPayment", "deletePenalty"] {
        let resp = send(&mut gw, json!({"action": action}));
        assert_eq!(resp["status"], "error", "{action}");
    }
    assert_eq!(gw.store().log_entries().unwrap().len(), 1);

    // getAllData needs no payload
    let resp = send(&mut gw, json!({"action": "getAllData"}));
    assert_eq!(resp["status"], "success");
}

#[test]
fn test_income_round_trips_every_field() {
    let mut gw = gateway();
    let input = json!({
        "id": "r-19",
        "date": "2025-06-02",
        "month": "2025-06",
        "timestamp": "2025-06-02T21:15:00+02:00",
        "operator": "Irina",
        "anketa": "Nola",
        "shift": "night",
        "day": "Monday",
        "sources": {
            "onlyfans": {"gross": 101.5, "percent": 40.0, "operatorShare": 40.6},
            "crypto": {"gross": 202.0, "percent": 35.0, "operatorShare": 70.7},
            "paypal": {"gross": 303.0, "percent": 30.0, "operatorShare": 90.9}
        },
        "total": {"gross": 606.5, "operatorShare": 202.2}
    });

    let resp = send(&mut gw, json!({"action": "addIncome", "data": input.clone()}));
    assert_eq!(resp["status"], "success");

    let list = incomes(&mut gw);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], input);
}

#[test]
fn test_fractional_numeric_id_matches_integer_delete() {
    let mut gw = gateway();
    let mut data = income("x", "A", 1.0, 1.0);
    data["id"] = json!(1.0);
    send(&mut gw, json!({"action": "addIncome", "data": data}));
    assert_eq!(incomes(&mut gw)[0]["id"], "1");

    send(&mut gw, json!({"action": "deleteIncome", "data": {"id": 1}}));
    assert!(incomes(&mut gw).is_empty());
}

#[test]
fn test_null_or_numeric_payment_type_is_salary() {
    let mut gw = gateway();
    for (id, kind) in [("p1", json!(null)), ("p2", json!(7))] {
        let resp = send(
            &mut gw,
            json!({"action": "addPayment", "data": {"id": id, "operator": "A", "type": kind, "amount": 5}}),
        );
        assert_eq!(resp["status"], "success");
    }

    let rows = gw.store().read_rows(schema::PAYMENTS.name).unwrap();
    assert_eq!(rows[1][5], "salary");
    assert_eq!(rows[2][5], "salary");
}
