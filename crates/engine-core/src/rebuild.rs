//! Batched table rebuild: the column-dropping migration.

use crate::{error::MigrationError, progress::CopyProgress};
use connectors::{
    error::ConnectorError,
    sqlite::{connection::SqliteConnection, metadata},
};
use model::{
    batching::ranges::KeyRanges,
    core::value::Value,
    migration::{options::MigrationOptions, summary::MigrationSummary},
    schema::selection::ColumnSelection,
};
use planner::query::{
    ast::{
        common::TableRef,
        create_table::{ColumnDef, CreateTable},
        drop_table::DropTable,
        insert::Insert,
        rename_table::RenameTable,
        select::{FromClause, Select},
    },
    between, ident,
    renderer::{Render, Renderer},
    value,
};
use std::time::Instant;
use tracing::{info, warn};

const SHADOW_SUFFIX: &str = "_new";

/// Rebuilds `table` with only the keep-list columns and swaps the shadow
/// table in place.
///
/// Each key window is copied inside its own transaction; a failure rolls
/// back the in-flight window only, leaving both `<table>` and
/// `<table>_new` on disk for inspection. Rows whose batching-column value
/// is NULL fall outside every window and are not copied.
pub fn drop_columns(
    conn: &mut SqliteConnection,
    table: &str,
    requested_keep: &[String],
    options: &MigrationOptions,
) -> Result<MigrationSummary, MigrationError> {
    let started = Instant::now();

    conn.set_foreign_keys(false)?;

    let current = metadata::table_columns(conn, table).map_err(|err| match err {
        ConnectorError::TableNotFound(name) => MigrationError::TableNotFound(name),
        other => MigrationError::Connector(other),
    })?;
    info!(
        table,
        columns = current.len(),
        "loaded current table schema"
    );

    let selection = ColumnSelection::resolve(&current, requested_keep);
    info!(keep = ?selection.keep_names(), drop = ?selection.drop, "reconciled keep-list");

    if selection.is_noop() {
        info!(table, "no columns to drop");
        conn.set_foreign_keys(true)?;
        return Ok(MigrationSummary {
            table: table.to_string(),
            dropped_columns: Vec::new(),
            rows_copied: 0,
            elapsed: started.elapsed(),
        });
    }

    let batch_column = selection
        .batch_column()
        .ok_or_else(|| MigrationError::NoKeepColumns(table.to_string()))?
        .name
        .clone();

    let total_rows = metadata::row_count(conn, table)?;
    let bounds = metadata::key_bounds(conn, table, &batch_column)?;

    let rows_copied = rebuild_and_swap(
        conn,
        table,
        &selection,
        &batch_column,
        total_rows,
        bounds,
        options.batch_size,
    )
    .map_err(|source| MigrationError::BatchCopy {
        table: table.to_string(),
        source,
    })?;

    conn.set_foreign_keys(true)?;

    let summary = MigrationSummary {
        table: table.to_string(),
        dropped_columns: selection.drop.clone(),
        rows_copied,
        elapsed: started.elapsed(),
    };
    info!(
        table,
        dropped = summary.dropped_columns.len(),
        rows = summary.rows_copied,
        "migration complete in {:.2}s ({:.1} rows/sec)",
        summary.elapsed_seconds(),
        summary.rows_per_second(),
    );
    Ok(summary)
}

fn rebuild_and_swap(
    conn: &mut SqliteConnection,
    table: &str,
    selection: &ColumnSelection,
    batch_column: &str,
    total_rows: u64,
    bounds: Option<(i64, i64)>,
    batch_size: i64,
) -> Result<u64, ConnectorError> {
    let shadow = format!("{table}{SHADOW_SUFFIX}");

    let create = CreateTable {
        table: TableRef::new(&shadow),
        columns: selection.keep.iter().map(ColumnDef::from).collect(),
        if_not_exists: false,
    };
    let (create_sql, _) = render(&create);
    info!(sql = %create_sql, "creating shadow table");
    conn.execute(&create_sql, &[])?;

    let keep_names = selection.keep_names();
    let mut progress = CopyProgress::new(total_rows);

    match bounds {
        Some((min_key, max_key)) => {
            info!(
                batch_column,
                min_key, max_key, batch_size, "copying rows in key windows"
            );
            for (lower, upper) in KeyRanges::new(min_key, max_key, batch_size) {
                let insert = window_insert(table, &shadow, &keep_names, batch_column, lower, upper);
                let (sql, params) = render(&insert);

                let tx = conn.transaction()?;
                let copied = tx.execute(&sql, &params)?;
                tx.commit()?;

                progress.record_batch(copied as u64);
            }
        }
        None => warn!(table, "table is empty; nothing to copy"),
    }

    let (drop_sql, _) = render(&DropTable {
        table: TableRef::new(table),
        if_exists: false,
    });
    let (rename_sql, _) = render(&RenameTable {
        table: TableRef::new(&shadow),
        new_name: table.to_string(),
    });

    let tx = conn.transaction()?;
    tx.execute(&drop_sql, &[])?;
    tx.execute(&rename_sql, &[])?;
    tx.commit()?;
    info!(table, shadow = %shadow, "swapped shadow table into place");

    Ok(progress.rows_copied())
}

/// Projection of one key window into the shadow table.
fn window_insert(
    table: &str,
    shadow: &str,
    keep_names: &[String],
    batch_column: &str,
    lower: i64,
    upper: i64,
) -> Insert {
    let select = Select {
        columns: keep_names.iter().map(|name| ident(name)).collect(),
        from: Some(FromClause {
            table: TableRef::new(table),
            alias: None,
        }),
        where_clause: Some(between(
            ident(batch_column),
            value(Value::Int(lower)),
            value(Value::Int(upper)),
        )),
        ..Default::default()
    };

    Insert {
        table: TableRef::new(shadow),
        columns: keep_names.to_vec(),
        select,
    }
}

fn render(node: &impl Render) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new();
    node.render(&mut renderer);
    renderer.finish()
}
