use connectors::{
    error::ConnectorError,
    sqlite::{connection::SqliteConnection, metadata},
};
use model::schema::column::ColumnMetadata;
use serde::Serialize;
use tracing::debug;

/// Catalog snapshot of every user table.
#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub tables: Vec<TableReport>,
}

#[derive(Debug, Serialize)]
pub struct TableReport {
    pub name: String,
    pub row_count: u64,
    pub columns: Vec<ColumnMetadata>,
}

pub fn inspect_database(conn: &SqliteConnection) -> Result<DatabaseReport, ConnectorError> {
    let mut tables = Vec::new();
    for name in metadata::list_tables(conn)? {
        debug!(table = %name, "reading table metadata");
        let columns = metadata::table_columns(conn, &name)?;
        let row_count = metadata::row_count(conn, &name)?;
        tables.push(TableReport {
            name,
            row_count,
            columns,
        });
    }
    Ok(DatabaseReport { tables })
}
