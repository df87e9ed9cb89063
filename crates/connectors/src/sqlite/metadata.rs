//! Catalog introspection over `sqlite_master` and `PRAGMA table_info`.
//!
//! Read-only; identifiers fed back into SQL here come from the catalog
//! itself and are double-quoted.

use crate::{error::ConnectorError, sqlite::connection::SqliteConnection};
use model::{core::value::Value, schema::column::ColumnMetadata};
use tracing::trace;

pub fn table_exists(conn: &SqliteConnection, table: &str) -> Result<bool, ConnectorError> {
    let row = conn.query_one(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
        &[Value::Text(table.to_string())],
    )?;
    Ok(row.is_some())
}

/// Ordered column definitions for `table`, or `TableNotFound`.
pub fn table_columns(
    conn: &SqliteConnection,
    table: &str,
) -> Result<Vec<ColumnMetadata>, ConnectorError> {
    if !table_exists(conn, table)? {
        return Err(ConnectorError::TableNotFound(table.to_string()));
    }

    trace!(table, "reading table_info");
    let sql = format!("PRAGMA table_info({})", quote_ident(table));
    let rows = conn.query(&sql, &[])?;

    let columns = rows
        .iter()
        .map(|row| ColumnMetadata {
            ordinal: row.get("cid").and_then(Value::as_i64).unwrap_or(0) as usize,
            name: row
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            declared_type: row
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            not_null: row.get("notnull").and_then(Value::as_i64).unwrap_or(0) != 0,
            default_value: row
                .get("dflt_value")
                .filter(|value| !value.is_null())
                .and_then(Value::as_string),
            is_primary_key: row.get("pk").and_then(Value::as_i64).unwrap_or(0) > 0,
        })
        .collect();

    Ok(columns)
}

/// User tables, excluding SQLite's internal ones.
pub fn list_tables(conn: &SqliteConnection) -> Result<Vec<String>, ConnectorError> {
    let rows = conn.query(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        &[],
    )?;
    Ok(rows
        .iter()
        .filter_map(|row| row.get("name").and_then(Value::as_str).map(str::to_string))
        .collect())
}

pub fn row_count(conn: &SqliteConnection, table: &str) -> Result<u64, ConnectorError> {
    let sql = format!("SELECT COUNT(*) AS n FROM {}", quote_ident(table));
    let row = conn.query_one(&sql, &[])?;
    Ok(row
        .and_then(|r| r.get("n").and_then(Value::as_i64))
        .unwrap_or(0) as u64)
}

/// `(MIN, MAX)` of `column`, or `None` for an empty table.
pub fn key_bounds(
    conn: &SqliteConnection,
    table: &str,
    column: &str,
) -> Result<Option<(i64, i64)>, ConnectorError> {
    let sql = format!(
        "SELECT MIN({col}) AS lo, MAX({col}) AS hi FROM {tbl}",
        col = quote_ident(column),
        tbl = quote_ident(table),
    );
    let row = conn.query_one(&sql, &[])?;
    let bounds = row.and_then(|r| {
        let lo = r.get("lo").and_then(Value::as_i64)?;
        let hi = r.get("hi").and_then(Value::as_i64)?;
        Some((lo, hi))
    });
    Ok(bounds)
}

/// One non-NULL value of `column`, if the table has any.
pub fn sample_value(
    conn: &SqliteConnection,
    table: &str,
    column: &str,
) -> Result<Option<Value>, ConnectorError> {
    let sql = format!(
        "SELECT {col} AS sample FROM {tbl} WHERE {col} IS NOT NULL LIMIT 1",
        col = quote_ident(column),
        tbl = quote_ident(table),
    );
    let row = conn.query_one(&sql, &[])?;
    Ok(row.and_then(|r| r.get("sample").cloned()))
}

fn quote_ident(name: &str) -> String {
    format!(r#""{}""#, name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SqliteConnection {
        let conn = SqliteConnection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE affiliates (
                id INTEGER PRIMARY KEY,
                surname TEXT NOT NULL,
                firstname TEXT,
                city TEXT DEFAULT 'Abuja'
            )",
            &[],
        )
        .unwrap();
        conn
    }

    #[test]
    fn columns_carry_catalog_metadata() {
        let conn = registry();
        let columns = table_columns(&conn, "affiliates").unwrap();

        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "surname", "firstname", "city"]);

        assert!(columns[0].is_primary_key);
        assert_eq!(columns[0].declared_type, "INTEGER");
        assert!(columns[1].not_null);
        assert_eq!(columns[3].default_value.as_deref(), Some("'Abuja'"));
        assert_eq!(columns[2].ordinal, 2);
    }

    #[test]
    fn missing_table_is_an_error() {
        let conn = registry();
        let result = table_columns(&conn, "organizations_old");
        assert!(matches!(result, Err(ConnectorError::TableNotFound(name)) if name == "organizations_old"));
    }

    #[test]
    fn lists_user_tables_only() {
        let conn = registry();
        conn.execute("CREATE TABLE organizations_old (id INTEGER)", &[])
            .unwrap();
        let tables = list_tables(&conn).unwrap();
        assert_eq!(tables, vec!["affiliates", "organizations_old"]);
    }

    #[test]
    fn key_bounds_for_sparse_keys() {
        let conn = registry();
        conn.execute(
            "INSERT INTO affiliates (id, surname) VALUES (3, 'a'), (90, 'b'), (41, 'c')",
            &[],
        )
        .unwrap();
        assert_eq!(key_bounds(&conn, "affiliates", "id").unwrap(), Some((3, 90)));
    }

    #[test]
    fn key_bounds_of_empty_table_are_none() {
        let conn = registry();
        assert_eq!(key_bounds(&conn, "affiliates", "id").unwrap(), None);
    }

    #[test]
    fn sample_skips_nulls() {
        let conn = registry();
        conn.execute(
            "INSERT INTO affiliates (id, surname, firstname) VALUES (1, 'x', NULL), (2, 'y', 'Ngozi')",
            &[],
        )
        .unwrap();
        assert_eq!(
            sample_value(&conn, "affiliates", "firstname").unwrap(),
            Some(Value::Text("Ngozi".into()))
        );
        assert_eq!(row_count(&conn, "affiliates").unwrap(), 2);
    }
}
