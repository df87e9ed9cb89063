use connectors::sqlite::connection::SqliteConnection;
use engine_core::{export::export_column_samples, inspect::inspect_database};

fn fixture() -> SqliteConnection {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE organizations_old (
            id INTEGER PRIMARY KEY,
            rcNumber TEXT NOT NULL,
            address TEXT DEFAULT 'unknown'
        )",
        &[],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO organizations_old (id, rcNumber, address) VALUES
            (1, 'RC100', NULL),
            (2, 'RC200', '2 Garki St')",
        &[],
    )
    .unwrap();
    conn
}

#[test]
fn report_covers_tables_and_columns() {
    let conn = fixture();
    let report = inspect_database(&conn).unwrap();

    assert_eq!(report.tables.len(), 1);
    let table = &report.tables[0];
    assert_eq!(table.name, "organizations_old");
    assert_eq!(table.row_count, 2);

    let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "rcNumber", "address"]);
    assert!(table.columns[0].is_primary_key);
    assert!(table.columns[1].not_null);
}

#[test]
fn export_writes_header_and_samples() {
    let conn = fixture();
    let mut out = Vec::new();

    let exported = export_column_samples(&conn, "organizations_old", &mut out).unwrap();
    assert_eq!(exported, 3);

    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "column,type,notnull,dflt_value,pk,sample");
    assert_eq!(lines[1], "id,INTEGER,0,,1,1");
    assert_eq!(lines[2], "rcNumber,TEXT,1,,0,RC100");
    // NULL in row 1 is skipped in favour of a non-NULL sample
    assert_eq!(lines[3], "address,TEXT,0,'unknown',0,2 Garki St");
    assert_eq!(lines.len(), 4);
}
