use tally_catalog::SourceRow;
use tally_core::LedgerError;
use tally_session::Session;

fn stationery_rows() -> Vec<SourceRow> {
    vec![
        SourceRow::new("Pen", "10"),
        SourceRow::new("Notebook", "25"),
    ]
}

#[test]
fn full_session_from_load_to_export() {
    let mut session = Session::new();
    session.load(stationery_rows()).unwrap();

    let names: Vec<&str> = session
        .catalog_entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["Pen", "Notebook"]);

    session.add_one("Pen").unwrap();
    session.add_one("Pen").unwrap();
    session.add_one("Notebook").unwrap();

    let lines: Vec<(&str, u32)> = session
        .current_lines()
        .iter()
        .map(|l| (l.item_name.as_str(), l.quantity))
        .collect();
    assert_eq!(lines, [("Pen", 2), ("Notebook", 1)]);
    assert_eq!(session.grand_total().unwrap(), 45);

    let document = session.export("Justin").unwrap();
    assert_eq!(document.customer_name, "Justin");
    assert_eq!(document.rows.len(), 4);

    let cells: Vec<(&str, &str, &str)> = document
        .rows
        .iter()
        .map(|r| (r.quantity.as_str(), r.item.as_str(), r.price.as_str()))
        .collect();
    assert_eq!(
        cells,
        [
            ("2", "Pen", "20"),
            ("1", "Notebook", "25"),
            ("", "", "----------"),
            ("", "", "P 45"),
        ]
    );
}

#[test]
fn export_is_repeatable_without_mutation() {
    let mut session = Session::new();
    session.load(stationery_rows()).unwrap();
    session.add_one("Notebook").unwrap();

    let first = session.export("").unwrap();
    let second = session.export("").unwrap();
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.customer_name, "");
}

#[test]
fn rejected_commands_leave_all_state_untouched() {
    let mut session = Session::new();
    session.load(stationery_rows()).unwrap();
    session.add_one("Pen").unwrap();

    let err = session.add_one("Eraser").unwrap_err();
    assert_eq!(err, LedgerError::unknown_item("Eraser"));

    let err = session.remove_one("Notebook").unwrap_err();
    assert_eq!(err, LedgerError::not_in_order("Notebook"));

    let lines: Vec<(&str, u32)> = session
        .current_lines()
        .iter()
        .map(|l| (l.item_name.as_str(), l.quantity))
        .collect();
    assert_eq!(lines, [("Pen", 1)]);
    assert_eq!(session.grand_total().unwrap(), 10);
}

#[test]
fn document_json_is_the_writer_contract() {
    let mut session = Session::new();
    session.load(stationery_rows()).unwrap();
    session.add_one("Pen").unwrap();

    let document = session.export("Walk-in").unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["customer_name"], "Walk-in");
    assert!(json["exported_at"].is_string());
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["quantity"], "1");
    assert_eq!(rows[0]["item"], "Pen");
    assert_eq!(rows[0]["price"], "10");
    assert_eq!(rows[1]["price"], "----------");
    assert_eq!(rows[2]["price"], "P 10");
}
