use crate::error::ExportError;
use connectors::sqlite::{connection::SqliteConnection, metadata};
use std::io::Write;
use tracing::warn;

/// Writes `column,type,notnull,dflt_value,pk,sample` rows for `table`.
///
/// `sample` is one non-NULL value of the column; it stays empty when the
/// table has none or the sample query fails (the failure is logged so the
/// CSV itself stays machine-readable).
pub fn export_column_samples(
    conn: &SqliteConnection,
    table: &str,
    writer: impl Write,
) -> Result<usize, ExportError> {
    let columns = metadata::table_columns(conn, table)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["column", "type", "notnull", "dflt_value", "pk", "sample"])?;

    for column in &columns {
        let sample = match metadata::sample_value(conn, table, &column.name) {
            Ok(Some(value)) => value.to_string(),
            Ok(None) => String::new(),
            Err(err) => {
                warn!(column = %column.name, error = %err, "sampling failed");
                String::new()
            }
        };

        csv_writer.write_record([
            column.name.as_str(),
            column.declared_type.as_str(),
            if column.not_null { "1" } else { "0" },
            column.default_value.as_deref().unwrap_or(""),
            if column.is_primary_key { "1" } else { "0" },
            sample.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(columns.len())
}
