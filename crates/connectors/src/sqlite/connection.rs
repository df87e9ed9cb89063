//! SQLite connection handle.

use crate::error::ConnectorError;
use model::{core::value::Value, records::row::RowData};
use rusqlite::{
    Connection, OpenFlags, Transaction, TransactionBehavior, params_from_iter, types::ValueRef,
};
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Generous lock wait to ride out long batch transactions on large tables.
const BUSY_TIMEOUT: Duration = Duration::from_secs(600);

/// Owned connection, acquired at the start of an operation and released on
/// every exit path when dropped.
pub struct SqliteConnection {
    conn: Connection,
}

impl SqliteConnection {
    /// Opens an existing database file read-write.
    pub fn open(path: &Path) -> Result<Self, ConnectorError> {
        info!(path = %path.display(), "opening SQLite database");
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE;
        let conn =
            Connection::open_with_flags(path, flags).map_err(|source| ConnectorError::Open {
                path: path.display().to_string(),
                source,
            })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, ConnectorError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Toggles foreign-key enforcement for this connection.
    pub fn set_foreign_keys(&self, enabled: bool) -> Result<(), ConnectorError> {
        let mode = if enabled { "ON" } else { "OFF" };
        debug!(mode, "setting foreign_keys pragma");
        self.conn.pragma_update(None, "foreign_keys", mode)?;
        Ok(())
    }

    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, ConnectorError> {
        debug!(sql, "executing statement");
        let bound = bind_values(params);
        let affected = self.conn.execute(sql, params_from_iter(bound.iter()))?;
        Ok(affected)
    }

    pub fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<RowData>, ConnectorError> {
        debug!(sql, "running query");
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let bound = bind_values(params);
        let mut rows = stmt.query(params_from_iter(bound.iter()))?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                values.push(read_value(row, idx)?);
            }
            out.push(RowData::new(columns.clone(), values));
        }
        Ok(out)
    }

    /// First result row, if any.
    pub fn query_one(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<RowData>, ConnectorError> {
        Ok(self.query(sql, params)?.into_iter().next())
    }

    /// Deferred transaction; rolls back on drop unless committed.
    pub fn transaction(&mut self) -> Result<SqliteTransaction<'_>, ConnectorError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Deferred)?;
        Ok(SqliteTransaction { tx })
    }
}

/// One in-flight transaction scope.
pub struct SqliteTransaction<'conn> {
    tx: Transaction<'conn>,
}

impl SqliteTransaction<'_> {
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, ConnectorError> {
        debug!(sql, "executing statement in transaction");
        let bound = bind_values(params);
        let affected = self.tx.execute(sql, params_from_iter(bound.iter()))?;
        Ok(affected)
    }

    pub fn commit(self) -> Result<(), ConnectorError> {
        self.tx.commit()?;
        Ok(())
    }
}

fn bind_values(params: &[Value]) -> Vec<rusqlite::types::Value> {
    params
        .iter()
        .map(|value| match value {
            Value::Int(v) => rusqlite::types::Value::Integer(*v),
            Value::Real(v) => rusqlite::types::Value::Real(*v),
            Value::Text(v) => rusqlite::types::Value::Text(v.clone()),
            Value::Bytes(v) => rusqlite::types::Value::Blob(v.clone()),
            Value::Null => rusqlite::types::Value::Null,
        })
        .collect()
}

fn read_value(row: &rusqlite::Row<'_>, idx: usize) -> Result<Value, ConnectorError> {
    let value = match row.get_ref(idx)? {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Int(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(v) => Value::Text(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => Value::Bytes(v.to_vec()),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SqliteConnection {
        let conn = SqliteConnection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE affiliates (id INTEGER PRIMARY KEY, surname TEXT)",
            &[],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO affiliates (id, surname) VALUES (?1, ?2)",
            &[Value::Int(1), Value::Text("Adeyemi".into())],
        )
        .unwrap();
        conn
    }

    #[test]
    fn query_maps_storage_classes() {
        let conn = seeded();
        let rows = conn
            .query("SELECT id, surname, NULL AS missing FROM affiliates", &[])
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("id"), Some(&Value::Int(1)));
        assert_eq!(
            rows[0].get("surname"),
            Some(&Value::Text("Adeyemi".into()))
        );
        assert_eq!(rows[0].get("missing"), Some(&Value::Null));
    }

    #[test]
    fn dropped_transaction_rolls_back() {
        let mut conn = seeded();
        {
            let tx = conn.transaction().unwrap();
            tx.execute(
                "INSERT INTO affiliates (id, surname) VALUES (2, 'Bello')",
                &[],
            )
            .unwrap();
            // dropped without commit
        }
        let rows = conn.query("SELECT id FROM affiliates", &[]).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn committed_transaction_persists() {
        let mut conn = seeded();
        {
            let tx = conn.transaction().unwrap();
            tx.execute(
                "INSERT INTO affiliates (id, surname) VALUES (2, 'Bello')",
                &[],
            )
            .unwrap();
            tx.commit().unwrap();
        }
        let rows = conn.query("SELECT id FROM affiliates", &[]).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn open_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SqliteConnection::open(&dir.path().join("absent.db"));
        assert!(matches!(result, Err(ConnectorError::Open { .. })));
    }
}
