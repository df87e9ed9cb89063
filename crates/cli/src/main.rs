use crate::error::CliError;
use clap::Parser;
use commands::{Commands, SearchScope};
use connectors::sqlite::connection::SqliteConnection;
use engine_core::{backup, export, inspect, rebuild, search};
use model::migration::options::MigrationOptions;
use std::path::Path;
use tracing::{Level, info};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "regtool",
    version = "0.1.0",
    about = "Companies-registry SQLite maintenance tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DropColumns {
            db,
            table,
            columns_file,
            batch_size,
            backup,
        } => run_drop_columns(&db, &table, &columns_file, batch_size, backup)?,
        Commands::Search {
            db,
            term,
            by,
            columns,
            limit,
            json,
        } => run_search(&db, &term, by, columns.as_deref(), limit, json)?,
        Commands::Inspect { db, output } => {
            let conn = open_database(&db)?;
            let report = inspect::inspect_database(&conn)?;
            match output {
                Some(path) => output::write_report(&report, &path)?,
                None => output::print_report(&report),
            }
        }
        Commands::ExportColumns { db, table, output } => {
            let conn = open_database(&db)?;
            let file = std::fs::File::create(&output)?;
            let exported = export::export_column_samples(&conn, &table, file)?;
            println!("Wrote {exported} columns to {output}");
        }
    }

    Ok(())
}

fn run_drop_columns(
    db: &str,
    table: &str,
    columns_file: &str,
    batch_size: i64,
    create_backup: bool,
) -> Result<(), CliError> {
    let db_path = Path::new(db);
    if !db_path.is_file() {
        return Err(CliError::DatabaseFileMissing(db.to_string()));
    }

    info!(columns_file, "reading columns to keep");
    let keep = load_keep_list(columns_file)?;

    let options = MigrationOptions {
        batch_size,
        create_backup,
    };
    info!(table, batch_size, backup = create_backup, "starting column-drop migration");

    if options.create_backup {
        backup::backup_database(db_path)?;
    }

    let mut conn = SqliteConnection::open(db_path)?;
    let summary = rebuild::drop_columns(&mut conn, table, &keep, &options)?;
    output::print_summary(&summary);
    Ok(())
}

fn run_search(
    db: &str,
    term: &str,
    by: SearchScope,
    columns: Option<&[String]>,
    limit: Option<i64>,
    json: bool,
) -> Result<(), CliError> {
    let conn = open_database(db)?;

    let hits = match by {
        SearchScope::Business => search::search_businesses(&conn, term, columns, limit)?,
        SearchScope::Affiliate => search::search_affiliates(&conn, term, columns, limit)?,
        SearchScope::Combined => search::search_combined(&conn, term, limit)?,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&hits).map_err(CliError::JsonSerialize)?;
        println!("{rendered}");
    } else {
        output::print_hits(&hits);
    }
    Ok(())
}

fn open_database(db: &str) -> Result<SqliteConnection, CliError> {
    let db_path = Path::new(db);
    if !db_path.is_file() {
        return Err(CliError::DatabaseFileMissing(db.to_string()));
    }
    Ok(SqliteConnection::open(db_path)?)
}

/// One column name per line; blank lines are ignored, order is kept.
fn load_keep_list(path: &str) -> Result<Vec<String>, CliError> {
    let path_ref = Path::new(path);
    if !path_ref.is_file() {
        return Err(CliError::ColumnsFileMissing(path.to_string()));
    }
    let contents = std::fs::read_to_string(path_ref).map_err(CliError::ColumnsFileRead)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
